pub mod character_creator;
pub mod character_list;
pub mod hexa_grid;
pub mod node_icon;
pub mod priority_item;
pub mod priority_list;
pub mod step_form;
pub mod transfer_drawer;
