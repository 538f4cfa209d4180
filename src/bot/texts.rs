//! Fixed user-facing strings. All of them are sent with HTML parse mode.

pub const MAIN_MENU_PHOTO_URL: &str = "https://i.imgur.com/451wLeS.png";
pub const APPROVE_PHOTO_URL: &str = "https://i.imgur.com/ZLQxRGb.png";
pub const REJECT_PHOTO_URL: &str = "https://i.imgur.com/IxAb3Pu.png";

pub const OZON_URL: &str = "https://www.ozon.ru/seller/titan-style-1468753/products/?miniapp=seller_1468753";
pub const WILDBERRIES_URL: &str = "https://www.wildberries.ru/brands/310806956-titan-style/galstuki";

pub const MAIN_MENU_TEXT: &str = "Ниже расположено меню с типовыми ситуациями.\n\
Пожалуйста ознакомьтесь, нажав на соответствующую кнопку.\n\n\
Если мы решили Ваш вопрос, просим поставить ★★★★★ или скорректировать оценку, либо дополнить отзыв.\n\
С Уважением, TITAN STYLE!";

pub const CONTACT_TEXT: &str = "<b>Если вы не нашли ответа на свой вопрос:</b>\n\
Опишите, пожалуйста, проблему текстом ниже и прикрепите фото или видео товара, если это необходимо \
[<b>ОБЯЗАТЕЛЬНО вместе с текстом</b>].\n\
(Также желательно указать время оформления заявки на возврат или заказа товара, а также номер Заказа.)\n\n\
Вскоре с вами свяжется <b>специалист гарантийной службы</b>.";

pub const ADD_MORE_TEXT: &str = "Опишите вашу проблему дополнительно или прикрепите новые файлы.";
pub const NUDGE_TEXT: &str =
    "Чтобы отправить сообщение, пожалуйста, нажмите кнопку «💬 Не нашел ответа» в главном меню.";
pub const CANCEL_TEXT: &str = "Диалог отменён. Чтобы начать сначала, отправьте /start.";

pub const MESSAGE_RECEIVED_TEXT: &str = "Сообщение получено. Хотите что-то дополнить?";
pub const FILE_RECEIVED_TEXT: &str = "Файл получен. Хотите что-то дополнить?";
pub const FORWARD_FAILED_TEXT: &str =
    "Не удалось передать обращение специалисту. Попробуйте ещё раз позже.";

pub const GENERIC_ERROR_TEXT: &str =
    "Произошла ошибка. Попробуйте ещё раз или отправьте /start.";

pub const INVALID_REPLY_TARGET_TEXT: &str = "Ошибка: не удалось извлечь ID пользователя.";
pub const USER_REPLY_PROMPT: &str =
    "Введите текст ответа администратору или прикрепите фото/документ/видео.";
pub const ADMIN_REPLY_HEADER: &str = "<b>Сообщение от администратора:</b>";
pub const REPLY_SENT_TO_OPERATOR_TEXT: &str = "Ваш ответ отправлен администратору.";
pub const REPLY_TO_OPERATOR_FAILED_TEXT: &str = "Ошибка при отправке ответа администратору.";
pub const REPLY_TO_USER_FAILED_TEXT: &str = "Ошибка при отправке ответа пользователю.";

pub const ATTACHMENT_NOTE: &str = "<i>Пользователь отправил вложение.</i>";

pub fn admin_reply_prompt(user_id: i64) -> String {
    format!("Введите текст ответа пользователю {user_id} или пришлите фото/документ/видео.")
}

pub fn reply_sent_to_user(user_id: i64) -> String {
    format!("Ваш ответ отправлен пользователю {user_id}.")
}
