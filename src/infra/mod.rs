pub mod in_memory_form;

pub use in_memory_form::InMemoryFormControl;
