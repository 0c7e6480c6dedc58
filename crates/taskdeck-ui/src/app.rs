use chrono::{
  SecondsFormat,
  Utc
};
use gloo::console::log;
use gloo::timers::future::TimeoutFuture;
use taskdeck_shared::{
  TaskDraft,
  TaskDto
};
use yew::{
  Callback,
  Html,
  UseReducerHandle,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};

use crate::api;
use crate::components::{
  ApiInfo,
  ApiStatus,
  NoticeStack,
  TaskForm,
  TaskList
};
use crate::config::load_api_config;
use crate::notices::{
  NoticeAction,
  NoticeKind,
  Noticeboard
};

const NOTICE_TTL_MS: u32 = 3_000;
const DELETE_CONFIRM_PROMPT: &str =
  "Are you sure you want to delete \
   this task?";

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(load_api_config);
  let tasks =
    use_state(Vec::<TaskDto>::new);
  let loading = use_state(|| true);
  let api_connected =
    use_state(|| false);
  let api_message = {
    let base_url =
      config.base_url.clone();
    use_state(move || {
      format!(
        "Waiting for API at {base_url}"
      )
    })
  };
  let noticeboard =
    use_reducer(Noticeboard::default);
  let form_busy = use_state(|| false);
  let form_reset_seq =
    use_state(|| 0_u64);
  let refresh_tick =
    use_state(|| 0_u64);

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and hooks \
         initialized"
      );
      || ()
    });
  }

  // Startup health check; independent of the task load, neither waits for
  // the other.
  {
    let api_connected =
      api_connected.clone();
    let api_message =
      api_message.clone();
    let base_url =
      config.base_url.clone();
    use_effect_with((), move |_| {
      wasm_bindgen_futures::spawn_local(
        async move {
          let health =
            api::check_health(
              &base_url
            )
            .await;
          tracing::info!(
            connected =
              health.connected,
            message = %health.message,
            "health check finished"
          );
          api_connected
            .set(health.connected);
          api_message
            .set(health.message);
        }
      );
      || ()
    });
  }

  // Full task reload. Mutating handlers bump the tick instead of patching
  // the snapshot; when reloads overlap, the last fetch to resolve wins.
  {
    let tasks = tasks.clone();
    let loading = loading.clone();
    let base_url =
      config.base_url.clone();
    use_effect_with(
      *refresh_tick,
      move |tick| {
        let tick = *tick;
        wasm_bindgen_futures::spawn_local(
          async move {
            tracing::info!(
              tick,
              "refreshing task list"
            );
            let list =
              api::list_tasks(
                &base_url
              )
              .await;
            tasks.set(list);
            loading.set(false);
          }
        );
        || ()
      }
    );
  }

  let on_create = {
    let noticeboard =
      noticeboard.clone();
    let form_busy = form_busy.clone();
    let form_reset_seq =
      form_reset_seq.clone();
    let refresh_tick =
      refresh_tick.clone();
    let base_url =
      config.base_url.clone();
    Callback::from(
      move |draft: TaskDraft| {
        ui_debug(
          "action.create.submit",
          "create task submitted"
        );

        let noticeboard =
          noticeboard.clone();
        let form_busy =
          form_busy.clone();
        let form_reset_seq =
          form_reset_seq.clone();
        let refresh_tick =
          refresh_tick.clone();
        let base_url =
          base_url.clone();

        form_busy.set(true);
        wasm_bindgen_futures::spawn_local(
          async move {
            let payload = draft
              .into_create(
                created_at_now()
              );
            let created =
              api::create_task(
                &base_url, &payload
              )
              .await;
            form_busy.set(false);

            if created {
              form_reset_seq.set(
                (*form_reset_seq)
                  .wrapping_add(1)
              );
              refresh_tick.set(
                (*refresh_tick)
                  .saturating_add(1)
              );
              push_notice(
                &noticeboard,
                NoticeKind::Success,
                "Task created \
                 successfully!"
              );
            } else {
              push_notice(
                &noticeboard,
                NoticeKind::Error,
                "Failed to create task"
              );
            }
          }
        );
      }
    )
  };

  let on_toggle_complete = {
    let noticeboard =
      noticeboard.clone();
    let refresh_tick =
      refresh_tick.clone();
    let base_url =
      config.base_url.clone();
    Callback::from(
      move |task_id: String| {
        let noticeboard =
          noticeboard.clone();
        let refresh_tick =
          refresh_tick.clone();
        let base_url =
          base_url.clone();

        wasm_bindgen_futures::spawn_local(
          async move {
            let updated =
              api::set_task_completed(
                &base_url, &task_id
              )
              .await;

            if updated {
              refresh_tick.set(
                (*refresh_tick)
                  .saturating_add(1)
              );
              push_notice(
                &noticeboard,
                NoticeKind::Success,
                "Task marked as \
                 completed!"
              );
            } else {
              push_notice(
                &noticeboard,
                NoticeKind::Error,
                "Failed to update task"
              );
            }
          }
        );
      }
    )
  };

  let on_delete = {
    let noticeboard =
      noticeboard.clone();
    let refresh_tick =
      refresh_tick.clone();
    let base_url =
      config.base_url.clone();
    Callback::from(
      move |task_id: String| {
        let confirmed =
          web_sys::window()
            .and_then(|window| {
              window
                .confirm_with_message(
                  DELETE_CONFIRM_PROMPT
                )
                .ok()
            })
            .unwrap_or(false);

        if !confirmed {
          tracing::info!(
            %task_id,
            "task deletion canceled"
          );
          return;
        }

        let noticeboard =
          noticeboard.clone();
        let refresh_tick =
          refresh_tick.clone();
        let base_url =
          base_url.clone();

        wasm_bindgen_futures::spawn_local(
          async move {
            let deleted =
              api::delete_task(
                &base_url, &task_id
              )
              .await;

            if deleted {
              refresh_tick.set(
                (*refresh_tick)
                  .saturating_add(1)
              );
              push_notice(
                &noticeboard,
                NoticeKind::Info,
                "Task deleted \
                 successfully!"
              );
            } else {
              push_notice(
                &noticeboard,
                NoticeKind::Error,
                "Failed to delete task"
              );
            }
          }
        );
      }
    )
  };

  let on_probe_tasks = {
    let noticeboard =
      noticeboard.clone();
    let base_url =
      config.base_url.clone();
    Callback::from(move |_| {
      let noticeboard =
        noticeboard.clone();
      let base_url = base_url.clone();

      wasm_bindgen_futures::spawn_local(
        async move {
          if api::probe(
            &base_url, "/tasks"
          )
          .await
          {
            push_notice(
              &noticeboard,
              NoticeKind::Success,
              "GET /tasks is working!"
            );
          } else {
            push_notice(
              &noticeboard,
              NoticeKind::Error,
              "Cannot reach GET \
               /tasks endpoint"
            );
          }
        }
      );
    })
  };

  let on_probe_health = {
    let noticeboard =
      noticeboard.clone();
    let base_url =
      config.base_url.clone();
    Callback::from(move |_| {
      let noticeboard =
        noticeboard.clone();
      let base_url = base_url.clone();

      wasm_bindgen_futures::spawn_local(
        async move {
          if api::probe(
            &base_url, "/health"
          )
          .await
          {
            push_notice(
              &noticeboard,
              NoticeKind::Success,
              "GET /health is working!"
            );
          } else {
            push_notice(
              &noticeboard,
              NoticeKind::Error,
              "Cannot reach GET \
               /health endpoint"
            );
          }
        }
      );
    })
  };

  html! {
      <div class="app">
          <NoticeStack notices={noticeboard.notices.clone()} />
          <div class="shell">
              <header class="app-header">
                  <h1>{ "Task Manager" }</h1>
                  <p class="app-tagline">{ "A small task tracker backed by a REST API" }</p>
              </header>

              <ApiStatus connected={*api_connected} message={(*api_message).clone()} />

              <div class="columns">
                  <div class="panel">
                      <div class="header">{ "Create New Task" }</div>
                      <TaskForm
                          busy={*form_busy}
                          reset_seq={*form_reset_seq}
                          on_create={on_create}
                      />
                      <div class="quick-tests">
                          <div class="header">{ "Quick API Tests" }</div>
                          <button class="btn" onclick={on_probe_tasks}>{ "GET /tasks" }</button>
                          <button class="btn" onclick={on_probe_health}>{ "GET /health" }</button>
                      </div>
                  </div>

                  <TaskList
                      tasks={(*tasks).clone()}
                      loading={*loading}
                      on_toggle_complete={on_toggle_complete}
                      on_delete={on_delete}
                  />
              </div>

              <ApiInfo />

              <footer class="app-footer">
                  <p>{ "Tasks live on the backend; this client mirrors the latest fetch." }</p>
              </footer>
          </div>
      </div>
  }
}

fn push_notice(
  board: &UseReducerHandle<Noticeboard>,
  kind: NoticeKind,
  message: &str
) {
  board.dispatch(NoticeAction::Push(
    kind,
    message.to_string()
  ));

  let board = board.clone();
  wasm_bindgen_futures::spawn_local(
    async move {
      TimeoutFuture::new(NOTICE_TTL_MS)
        .await;
      board.dispatch(
        NoticeAction::ExpireOldest
      );
    }
  );
}

fn created_at_now() -> String {
  Utc::now().to_rfc3339_opts(
    SecondsFormat::Millis,
    true
  )
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
