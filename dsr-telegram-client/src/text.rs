use teloxide::types::{ChatId, Message, MessageEntity, MessageEntityKind};

/// Relay に渡す対象となった Telegram のメッセージ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub chat_id: ChatId,
    pub message_id: i32,
    pub text: String,

    /// 返信時に元メッセージを引用するか。個人チャット以外でのみ引用する。
    pub quote_reply: bool,
}

impl InboundMessage {
    /// コマンドでないテキストメッセージのみを取り出す。
    pub fn from_message(message: &Message) -> Option<InboundMessage> {
        let text = message.text()?;
        if starts_with_command(message.entities().unwrap_or_default()) {
            return None;
        }

        Some(InboundMessage {
            chat_id: message.chat.id,
            message_id: message.id.0,
            text: text.to_string(),
            quote_reply: !message.chat.is_private(),
        })
    }
}

/// 先頭のエンティティが offset 0 の bot_command ならコマンド扱い。
pub fn starts_with_command(entities: &[MessageEntity]) -> bool {
    entities
        .first()
        .is_some_and(|e| e.kind == MessageEntityKind::BotCommand && e.offset == 0)
}

/// 1 メッセージの上限を超える文字列を順序を保ったまま分割する。
/// 長さは Telegram と同じく UTF-16 コードユニットで数え、文字の途中では切らない。
/// 空文字列でも 1 要素は返す。
pub fn split_for_telegram(text: &str, max_length: usize) -> Vec<String> {
    if max_length == 0 || text.encode_utf16().count() <= max_length {
        return vec![text.to_string()];
    }

    let mut chunks = vec![];
    let mut current = String::new();
    let mut current_units = 0;
    for c in text.chars() {
        let units = c.len_utf16();
        if current_units + units > max_length && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_units = 0;
        }
        current.push(c);
        current_units += units;
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::{Value, json};

    fn entity(kind: MessageEntityKind, offset: usize, length: usize) -> MessageEntity {
        MessageEntity { kind, offset, length }
    }

    fn message(chat: Value, content: Value) -> Message {
        let mut raw = json!({
            "message_id": 17,
            "date": 1_700_000_000,
            "chat": chat,
            "from": {"id": 7, "is_bot": false, "first_name": "Alice"},
        });
        if let (Some(raw), Some(content)) = (raw.as_object_mut(), content.as_object()) {
            raw.extend(content.clone());
        }
        serde_json::from_value(raw).expect("message must deserialize")
    }

    fn private_chat() -> Value {
        json!({"id": 42, "type": "private", "first_name": "Alice"})
    }

    #[test]
    fn leading_bot_command_is_command() {
        assert!(starts_with_command(&[entity(MessageEntityKind::BotCommand, 0, 6)]));
    }

    #[test]
    fn plain_or_later_command_is_not_command() {
        assert!(!starts_with_command(&[]));
        assert!(!starts_with_command(&[entity(MessageEntityKind::BotCommand, 4, 6)]));
        assert!(!starts_with_command(&[
            entity(MessageEntityKind::Bold, 0, 3),
            entity(MessageEntityKind::BotCommand, 0, 6),
        ]));
    }

    #[test]
    fn plain_text_is_accepted() {
        let inbound = InboundMessage::from_message(&message(private_chat(), json!({"text": "hello"})))
            .expect("plain text must be accepted");

        assert_eq!(
            inbound,
            InboundMessage {
                chat_id: ChatId(42),
                message_id: 17,
                text: "hello".into(),
                quote_reply: false,
            }
        );
    }

    #[test]
    fn group_text_is_quoted() {
        let chat = json!({"id": -100, "type": "group", "title": "friends"});
        let inbound = InboundMessage::from_message(&message(chat, json!({"text": "hello"})))
            .expect("group text must be accepted");

        assert_eq!(inbound.chat_id, ChatId(-100));
        assert!(inbound.quote_reply);
    }

    #[test]
    fn non_text_is_ignored() {
        let photo = json!({"photo": [{
            "file_id": "photo-id",
            "file_unique_id": "photo-unique",
            "file_size": 1024,
            "width": 64,
            "height": 64,
        }]});
        let location = json!({"location": {"latitude": 35.68, "longitude": 139.76}});

        assert_eq!(InboundMessage::from_message(&message(private_chat(), photo)), None);
        assert_eq!(InboundMessage::from_message(&message(private_chat(), location)), None);
    }

    #[test]
    fn leading_command_message_is_ignored() {
        let start = json!({
            "text": "/start",
            "entities": [{"type": "bot_command", "offset": 0, "length": 6}],
        });
        assert_eq!(InboundMessage::from_message(&message(private_chat(), start)), None);
    }

    #[test]
    fn command_in_the_middle_is_relayed() {
        let text = json!({
            "text": "try /start later",
            "entities": [{"type": "bot_command", "offset": 4, "length": 6}],
        });
        let inbound =
            InboundMessage::from_message(&message(private_chat(), text)).expect("mid-text command must be relayed");

        assert_eq!(inbound.text, "try /start later");
    }

    #[test]
    fn short_text_is_not_split() {
        assert_eq!(split_for_telegram("hello", 4096), vec!["hello"]);
        assert_eq!(split_for_telegram("", 4096), vec![""]);
    }

    #[test]
    fn long_text_is_split_on_char_boundaries() {
        let text = "あいうえおかきくけこ";
        let chunks = split_for_telegram(text, 4);

        assert_eq!(chunks, vec!["あいうえ", "おかきく", "けこ"]);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn exact_length_is_single_chunk() {
        let text = "x".repeat(4096);
        assert_eq!(split_for_telegram(&text, 4096).len(), 1);
        assert_eq!(split_for_telegram(&format!("{text}y"), 4096).len(), 2);
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        let text = "😀".repeat(4096);
        let chunks = split_for_telegram(&text, 4096);

        assert_eq!(chunks.len(), 2);
        for chunk in &chunks {
            assert!(chunk.encode_utf16().count() <= 4096);
        }
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn surrogate_pair_is_never_cut() {
        let chunks = split_for_telegram("a😀b", 2);

        assert_eq!(chunks, vec!["a", "😀", "b"]);
    }
}
