use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ApiStatusProps {
  pub connected: bool,
  pub message:   String
}

#[function_component(ApiStatus)]
pub fn api_status(
  props: &ApiStatusProps
) -> Html {
  let dot_class = if props.connected {
    "dot connected"
  } else {
    "dot disconnected"
  };

  html! {
      <div class="panel api-status">
          <div class={dot_class}></div>
          <span>{ props.message.clone() }</span>
      </div>
  }
}
