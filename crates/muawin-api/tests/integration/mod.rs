mod form_flow;
mod json_api;
