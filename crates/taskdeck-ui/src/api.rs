use gloo::net::http::{
  Request,
  Response
};
use taskdeck_shared::{
  TaskCreate,
  TaskDto,
  TaskPatch
};

#[derive(Clone, PartialEq)]
pub struct ApiHealth {
  pub connected: bool,
  pub message:   String
}

async fn send_get(
  url: &str
) -> Result<Response, String> {
  Request::get(url)
    .send()
    .await
    .map_err(|error| {
      format!("request error: {error}")
    })
}

pub async fn check_health(
  base_url: &str
) -> ApiHealth {
  let url =
    format!("{base_url}/health");
  match send_get(&url).await {
    | Ok(response)
      if response.ok() =>
    {
      ApiHealth {
        connected: true,
        message:
          "Connected successfully"
            .to_string()
      }
    }
    | Ok(response) => {
      tracing::warn!(
        status = response.status(),
        "health check returned \
         non-success status"
      );
      ApiHealth {
        connected: false,
        message:
          "Health check failed"
            .to_string()
      }
    }
    | Err(error) => {
      tracing::error!(%error, "health check failed");
      ApiHealth {
        connected: false,
        message:
          "Cannot reach backend"
            .to_string()
      }
    }
  }
}

pub async fn list_tasks(
  base_url: &str
) -> Vec<TaskDto> {
  let url = format!("{base_url}/tasks");
  let response =
    match send_get(&url).await {
      | Ok(response)
        if response.ok() =>
      {
        response
      }
      | Ok(response) => {
        tracing::warn!(
          status = response.status(),
          "task list returned \
           non-success status"
        );
        return Vec::new();
      }
      | Err(error) => {
        tracing::error!(%error, "failed to load tasks");
        return Vec::new();
      }
    };

  match response
    .json::<Vec<TaskDto>>()
    .await
  {
    | Ok(tasks) => tasks,
    | Err(error) => {
      tracing::error!(%error, "failed to decode task list");
      Vec::new()
    }
  }
}

pub async fn create_task(
  base_url: &str,
  payload: &TaskCreate
) -> bool {
  let url = format!("{base_url}/tasks");
  let request =
    match Request::post(&url)
      .json(payload)
    {
      | Ok(request) => request,
      | Err(error) => {
        tracing::error!(%error, "failed to encode create payload");
        return false;
      }
    };

  match request.send().await {
    | Ok(response)
      if response.ok() =>
    {
      true
    }
    | Ok(response) => {
      tracing::warn!(
        status = response.status(),
        "create task returned \
         non-success status"
      );
      false
    }
    | Err(error) => {
      tracing::error!(%error, "create task request failed");
      false
    }
  }
}

pub async fn set_task_completed(
  base_url: &str,
  task_id: &str
) -> bool {
  let url = format!(
    "{base_url}/tasks/{task_id}"
  );
  let request =
    match Request::put(&url).json(
      &TaskPatch {
        completed: true
      }
    ) {
      | Ok(request) => request,
      | Err(error) => {
        tracing::error!(%error, "failed to encode completion patch");
        return false;
      }
    };

  match request.send().await {
    | Ok(response)
      if response.ok() =>
    {
      true
    }
    | Ok(response) => {
      tracing::warn!(
        status = response.status(),
        %task_id,
        "completion update returned \
         non-success status"
      );
      false
    }
    | Err(error) => {
      tracing::error!(%error, %task_id, "completion update failed");
      false
    }
  }
}

pub async fn delete_task(
  base_url: &str,
  task_id: &str
) -> bool {
  let url = format!(
    "{base_url}/tasks/{task_id}"
  );
  match Request::delete(&url)
    .send()
    .await
  {
    | Ok(response)
      if response.ok() =>
    {
      true
    }
    | Ok(response) => {
      tracing::warn!(
        status = response.status(),
        %task_id,
        "delete returned non-success \
         status"
      );
      false
    }
    | Err(error) => {
      tracing::error!(%error, %task_id, "delete request failed");
      false
    }
  }
}

pub async fn probe(
  base_url: &str,
  path: &str
) -> bool {
  let url =
    format!("{base_url}{path}");
  match send_get(&url).await {
    | Ok(response) => response.ok(),
    | Err(error) => {
      tracing::warn!(%error, path, "endpoint probe failed");
      false
    }
  }
}
