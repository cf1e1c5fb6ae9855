pub mod name_index;
pub mod set_alias;
