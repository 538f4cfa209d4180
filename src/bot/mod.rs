pub mod callback_data;
pub mod commands;
pub mod flow;
pub mod handlers;
pub mod inbound;
pub mod keyboards;
pub mod menu;
pub mod messenger;
pub mod state;
pub mod texts;
