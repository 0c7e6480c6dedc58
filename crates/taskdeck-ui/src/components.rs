mod api_info;
mod api_status;
mod category_select;
mod notice_stack;
mod task_form;
mod task_list;
mod task_list_row;

pub use api_info::ApiInfo;
pub use api_status::ApiStatus;
pub use category_select::CategorySelect;
pub use notice_stack::NoticeStack;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
