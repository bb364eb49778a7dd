pub mod calendar_modal;
pub mod event_card;
pub mod event_form;
pub mod map_modal;
pub mod protected;
