use taskdeck_shared::TaskCategory;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CategorySelectProps {
  pub value:     TaskCategory,
  pub on_change: Callback<TaskCategory>
}

#[function_component(CategorySelect)]
pub fn category_select(
  props: &CategorySelectProps
) -> Html {
  let on_change = {
    let on_change =
      props.on_change.clone();
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

        match TaskCategory::from_key(
          &select.value()
        ) {
          | Some(category) => {
            on_change.emit(category)
          }
          | None => {
            tracing::warn!(
              value = %select.value(),
              "ignored unknown category \
               key"
            );
          }
        }
      }
    )
  };

  html! {
      <div class="field">
          <label>{ "Category" }</label>
          <select value={props.value.as_key()} onchange={on_change}>
              {
                  for TaskCategory::all().iter().map(|category| html! {
                      <option value={category.as_key()}>{ category.label() }</option>
                  })
              }
          </select>
      </div>
  }
}
