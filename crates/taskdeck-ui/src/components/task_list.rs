use taskdeck_shared::TaskDto;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:              Vec<TaskDto>,
  pub loading:            bool,
  pub on_toggle_complete:
    Callback<String>,
  pub on_delete:          Callback<String>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <div class="panel list">
          <div class="header">{ "Tasks" }</div>
          {
              if props.loading {
                  html! { <div class="list-empty">{ "Loading tasks..." }</div> }
              } else if props.tasks.is_empty() {
                  html! { <div class="list-empty">{ "No tasks yet. Create one to get started." }</div> }
              } else {
                  html! {
                      <>
                          {
                              for props.tasks.iter().cloned().map(|task| html! {
                                  <TaskListRow
                                      task={task}
                                      on_toggle_complete={props.on_toggle_complete.clone()}
                                      on_delete={props.on_delete.clone()}
                                  />
                              })
                          }
                      </>
                  }
              }
          }
      </div>
  }
}
