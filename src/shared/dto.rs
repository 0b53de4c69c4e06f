// Requests
pub mod create_task_request;
pub mod list_tasks_query;
pub mod update_task_request;

// Shared validation rules
pub mod field_rules;
pub mod validation_error;
