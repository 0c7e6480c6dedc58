use yew::{
  Html,
  function_component,
  html
};

const ENDPOINTS: [(&str, &str, &str);
  5] = [
  (
    "GET",
    "/health",
    "Backend health check"
  ),
  ("GET", "/tasks", "List all tasks"),
  ("POST", "/tasks", "Create a task"),
  (
    "PUT",
    "/tasks/{id}",
    "Mark a task completed"
  ),
  (
    "DELETE",
    "/tasks/{id}",
    "Delete a task"
  ),
];

#[function_component(ApiInfo)]
pub fn api_info() -> Html {
  html! {
      <div class="panel api-info">
          <div class="header">{ "API Endpoints" }</div>
          {
              for ENDPOINTS.iter().map(|(method, path, purpose)| html! {
                  <div class="endpoint">
                      <span class="method">{ *method }</span>
                      <span class="path">{ *path }</span>
                      <span class="purpose">{ *purpose }</span>
                  </div>
              })
          }
      </div>
  }
}
