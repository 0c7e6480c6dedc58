use taskdeck_shared::TaskDto;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub task:               TaskDto,
  pub on_toggle_complete:
    Callback<String>,
  pub on_delete:          Callback<String>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let task = &props.task;
  let dot_class = if task.completed {
    "dot done"
  } else {
    "dot pending"
  };
  let title_class = if task.completed
  {
    "task-title done"
  } else {
    "task-title"
  };
  let has_description = !task
    .description
    .trim()
    .is_empty();
  let created =
    task.created_at.clone();

  let on_complete = {
    let on_toggle_complete =
      props.on_toggle_complete.clone();
    let id = task.id.clone();
    Callback::from(move |_| {
      on_toggle_complete
        .emit(id.clone())
    })
  };

  let on_delete = {
    let on_delete =
      props.on_delete.clone();
    let id = task.id.clone();
    Callback::from(move |_| {
      on_delete.emit(id.clone())
    })
  };

  html! {
      <div class="row">
          <div class={dot_class}></div>
          <div class="row-main">
              <div class={title_class}>{ &task.title }</div>
              {
                  if has_description {
                      html! { <div class="task-subtitle">{ &task.description }</div> }
                  } else {
                      html! {}
                  }
              }
              <div class="row-badges">
                  <span class="badge">{ format!("priority:{}", task.priority.as_key()) }</span>
                  <span class="badge">{ format!("category:{}", task.category.as_key()) }</span>
                  {
                      if created.is_empty() {
                          html! {}
                      } else {
                          html! { <span class="badge">{ format!("created:{created}") }</span> }
                      }
                  }
              </div>
          </div>
          <div class="row-actions">
              {
                  if task.completed {
                      html! {}
                  } else {
                      html! { <button class="btn ok" onclick={on_complete}>{ "Complete" }</button> }
                  }
              }
              <button class="btn danger" onclick={on_delete}>{ "Delete" }</button>
          </div>
      </div>
  }
}
