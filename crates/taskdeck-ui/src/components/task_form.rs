use taskdeck_shared::{
  TaskCategory,
  TaskDraft,
  TaskPriority
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_state
};

use super::CategorySelect;

#[derive(Clone, PartialEq, Default)]
struct FormState {
  draft: TaskDraft,
  error: Option<String>
}

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub busy:      bool,
  // Bumped by the shell after a successful create; the draft survives
  // failed submissions untouched.
  pub reset_seq: u64,
  pub on_create: Callback<TaskDraft>
}

#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let form =
    use_state(FormState::default);

  {
    let form = form.clone();
    use_effect_with(
      props.reset_seq,
      move |_| {
        form.set(FormState::default());
        || ()
      }
    );
  }

  let on_title_input = {
    let form = form.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let mut next = (*form).clone();
        next.draft.title =
          input.value();
        next.error = None;
        form.set(next);
      }
    )
  };

  let on_description_input = {
    let form = form.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlTextAreaElement =
          e.target_unchecked_into();
        let mut next = (*form).clone();
        next.draft.description =
          input.value();
        next.error = None;
        form.set(next);
      }
    )
  };

  let on_priority_change = {
    let form = form.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let Some(select) =
          e.target_dyn_into::<
            web_sys::HtmlSelectElement
          >()
        else {
          tracing::warn!(
            "priority change event had \
             non-select target"
          );
          return;
        };

        if let Some(priority) =
          TaskPriority::from_key(
            &select.value()
          )
        {
          let mut next =
            (*form).clone();
          next.draft.priority =
            priority;
          next.error = None;
          form.set(next);
        }
      }
    )
  };

  let on_category_change = {
    let form = form.clone();
    Callback::from(
      move |category: TaskCategory| {
        let mut next = (*form).clone();
        next.draft.category = category;
        next.error = None;
        form.set(next);
      }
    )
  };

  let on_own_category_change = {
    let on_category_change =
      on_category_change.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let Some(select) =
          e.target_dyn_into::<
            web_sys::HtmlSelectElement
          >()
        else {
          tracing::warn!(
            "category change event had \
             non-select target"
          );
          return;
        };

        if let Some(category) =
          TaskCategory::from_key(
            &select.value()
          )
        {
          on_category_change
            .emit(category);
        }
      }
    )
  };

  let on_submit = {
    let form = form.clone();
    let on_create =
      props.on_create.clone();
    Callback::from(
      move |e: web_sys::SubmitEvent| {
        e.prevent_default();

        let current = (*form).clone();
        let Some(title) =
          trimmed_title(
            &current.draft.title
          )
        else {
          tracing::warn!(
            "blocked submit with \
             empty task title"
          );
          let mut next = current;
          next.error = Some(
            "Task title is required"
              .to_string()
          );
          form.set(next);
          return;
        };

        let mut draft =
          current.draft;
        draft.title = title;
        on_create.emit(draft);
      }
    )
  };

  let state = (*form).clone();

  html! {
      <form onsubmit={on_submit}>
          {
              if let Some(error) = state.error.clone() {
                  html! { <div class="form-error">{ error }</div> }
              } else {
                  html! {}
              }
          }
          <div class="field">
              <label>{ "Task Title *" }</label>
              <input
                  value={state.draft.title.clone()}
                  placeholder="Enter task title"
                  oninput={on_title_input}
              />
          </div>
          <CategorySelect
              value={state.draft.category}
              on_change={on_category_change}
          />
          <div class="field">
              <label>{ "Description" }</label>
              <textarea
                  rows="3"
                  value={state.draft.description.clone()}
                  placeholder="Enter task description"
                  oninput={on_description_input}
              />
          </div>
          <div class="field-grid">
              <div class="field">
                  <label>{ "Priority" }</label>
                  <select value={state.draft.priority.as_key()} onchange={on_priority_change}>
                      {
                          for TaskPriority::all().iter().map(|priority| html! {
                              <option value={priority.as_key()}>{ priority.label() }</option>
                          })
                      }
                  </select>
              </div>
              <div class="field">
                  <label>{ "Category" }</label>
                  <select value={state.draft.category.as_key()} onchange={on_own_category_change}>
                      {
                          for TaskCategory::all().iter().map(|category| html! {
                              <option value={category.as_key()}>{ category.label() }</option>
                          })
                      }
                  </select>
              </div>
          </div>
          <button type="submit" class="btn submit" disabled={props.busy}>
              { if props.busy { "Adding..." } else { "Add Task" } }
          </button>
      </form>
  }
}

fn trimmed_title(
  title: &str
) -> Option<String> {
  let trimmed = title.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_string())
  }
}

#[cfg(test)]
mod form_tests {
  use super::*;

  #[test]
  fn whitespace_only_title_is_rejected()
  {
    assert_eq!(trimmed_title(""), None);
    assert_eq!(
      trimmed_title("   \t"),
      None
    );
  }

  #[test]
  fn surrounding_whitespace_is_trimmed()
  {
    assert_eq!(
      trimmed_title("  Buy milk "),
      Some("Buy milk".to_string())
    );
  }
}
