pub mod program_picker;
