use yew::{
  Html,
  Properties,
  function_component,
  html
};

use crate::notices::Notice;

#[derive(Properties, PartialEq)]
pub struct NoticeStackProps {
  pub notices: Vec<Notice>
}

#[function_component(NoticeStack)]
pub fn notice_stack(
  props: &NoticeStackProps
) -> Html {
  html! {
      <div class="notice-stack">
          {
              for props.notices.iter().map(|notice| html! {
                  <div key={notice.id.to_string()} class={notice.kind.as_class()}>
                      { notice.message.clone() }
                  </div>
              })
          }
      </div>
  }
}
