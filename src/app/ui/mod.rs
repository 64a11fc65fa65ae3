mod details;
mod panels;
mod peer_list;
mod tutorial;
mod value_modal;
