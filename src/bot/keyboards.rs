use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use url::Url;

use crate::bot::callback_data::MenuButton;
use crate::bot::texts::{OZON_URL, WILDBERRIES_URL};

fn button(label: &str, target: MenuButton) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(label, target.to_string())
}

fn link_button(label: &str, href: &str) -> Option<InlineKeyboardButton> {
    match Url::parse(href) {
        Ok(url) => Some(InlineKeyboardButton::url(label, url)),
        Err(e) => {
            tracing::warn!("Skipping link button '{}': {}", label, e);
            None
        }
    }
}

/// Main menu, one button per row.
pub fn main_menu() -> InlineKeyboardMarkup {
    let mut rows = vec![
        vec![button("✅ Сможем помочь +", MenuButton::Approve)],
        vec![button("❌ НЕ Сможем помочь -", MenuButton::Reject)],
        vec![button("💬 Не нашел ответа", MenuButton::Contact)],
    ];
    rows.extend(
        [("🛍 МЫ НА ОЗОН", OZON_URL), ("🛍 МЫ НА ВБ", WILDBERRIES_URL)]
            .into_iter()
            .filter_map(|(label, href)| link_button(label, href))
            .map(|b| vec![b]),
    );
    InlineKeyboardMarkup::new(rows)
}

pub fn navigation() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        button("🔙 Назад", MenuButton::Back),
        button("🏠 Главное меню", MenuButton::MainMenu),
    ]])
}

pub fn continue_appeal() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        button("✏️ Дополнить обращение", MenuButton::AddMore),
        button("✅ Завершить", MenuButton::Done),
    ]])
}

pub fn admin_reply(user_id: i64) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![button("Ответить", MenuButton::AdminReply(user_id))]])
}

pub fn user_reply() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![button("Ответить админу", MenuButton::UserReply)]])
}

pub fn back_to_main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![button("🏠 Главное меню", MenuButton::MainMenu)]])
}
