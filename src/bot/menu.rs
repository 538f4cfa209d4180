use crate::bot::callback_data::MenuButton;
use crate::bot::keyboards;
use crate::bot::messenger::Outgoing;
use crate::bot::state::ConversationState;
use crate::bot::texts;

/// Static screens reachable from the menu buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Approve,
    Reject,
    ContactInstructions,
    AddMoreInstructions,
}

impl Screen {
    pub fn render(&self) -> Outgoing {
        match self {
            Screen::MainMenu => Outgoing::photo(texts::MAIN_MENU_PHOTO_URL)
                .with_caption(texts::MAIN_MENU_TEXT)
                .with_keyboard(keyboards::main_menu()),
            Screen::Approve => {
                Outgoing::photo(texts::APPROVE_PHOTO_URL).with_keyboard(keyboards::navigation())
            }
            Screen::Reject => {
                Outgoing::photo(texts::REJECT_PHOTO_URL).with_keyboard(keyboards::navigation())
            }
            Screen::ContactInstructions => {
                Outgoing::text(texts::CONTACT_TEXT).with_keyboard(keyboards::navigation())
            }
            Screen::AddMoreInstructions => {
                Outgoing::text(texts::ADD_MORE_TEXT).with_keyboard(keyboards::navigation())
            }
        }
    }
}

/// Screen and follow-up state for plain menu buttons.
///
/// Reply-flow buttons return `None`; they carry data and are handled by the flow.
pub fn route(button: MenuButton) -> Option<(Screen, ConversationState)> {
    let entry = match button {
        MenuButton::Approve => (Screen::Approve, ConversationState::AskQuestion),
        MenuButton::Reject => (Screen::Reject, ConversationState::Main),
        MenuButton::Contact => (Screen::ContactInstructions, ConversationState::AskQuestion),
        MenuButton::Back | MenuButton::MainMenu | MenuButton::Done => {
            (Screen::MainMenu, ConversationState::Main)
        }
        MenuButton::AddMore => (Screen::AddMoreInstructions, ConversationState::AskQuestion),
        MenuButton::AdminReply(_) | MenuButton::UserReply => return None,
    };
    Some(entry)
}
