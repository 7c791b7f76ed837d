//! Left-ticket API response DTOs.
//!
//! These types map directly to the JSON envelope returned by the 12306
//! `leftTicket/queryZ` endpoint. Fields use `Option` liberally because the
//! endpoint omits or empties parts of the envelope when a query is
//! rejected. Envelope fields with no consumer here (`flag`, the search
//! echo strings) are ignored on deserialization.

use std::collections::HashMap;

use serde::Deserialize;

/// Response envelope from `leftTicket/queryZ`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryReply {
    /// Payload; absent when the query was rejected.
    pub data: Option<ReplyData>,

    /// HTTP-like status code echoed inside the body.
    pub httpstatus: Option<u16>,

    /// Operator-facing messages. The endpoint sends either a single
    /// string or an array of strings depending on revision.
    #[serde(default)]
    pub messages: Messages,

    /// Whether the query was accepted.
    pub status: Option<bool>,
}

/// Payload of a successful query.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyData {
    /// Telecode → display name for the stations appearing in `result`.
    pub map: Option<HashMap<String, String>>,

    /// Raw per-train record strings (the `|`-delimited format).
    pub result: Option<Vec<String>>,
}

/// String-or-array message field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Messages {
    One(String),
    Many(Vec<String>),
}

impl Messages {
    /// All messages joined for display, empty when there are none.
    pub fn to_text(&self) -> String {
        match self {
            Messages::One(s) => s.clone(),
            Messages::Many(items) => items.join("; "),
        }
    }

    /// Whether the endpoint sent no message text.
    pub fn is_empty(&self) -> bool {
        match self {
            Messages::One(s) => s.is_empty(),
            Messages::Many(items) => items.iter().all(|s| s.is_empty()),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Messages::Many(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_reply() {
        let json = r#"{
            "data": {
                "flag": 1,
                "map": {
                    "BXP": "北京西",
                    "CSQ": "长沙"
                },
                "result": [
                    "|预订|240000G48508|G485|BXP|NXG|BXP|CWQ|07:03|14:06|07:03|N|x|20180208|3|P4|01|14|1|0|||||||||||无|无|无||O0M090|OM9|0"
                ]
            },
            "httpstatus": 200,
            "messages": "",
            "status": true
        }"#;

        let reply: QueryReply = serde_json::from_str(json).unwrap();

        assert_eq!(reply.status, Some(true));
        assert_eq!(reply.httpstatus, Some(200));
        assert!(reply.messages.is_empty());

        let data = reply.data.unwrap();
        let map = data.map.unwrap();
        assert_eq!(map.get("BXP").map(String::as_str), Some("北京西"));

        let result = data.result.unwrap();
        assert_eq!(result.len(), 1);
        assert!(result[0].contains("|G485|"));
    }

    #[test]
    fn deserialize_rejected_reply() {
        let json = r#"{
            "httpstatus": 200,
            "messages": "查询时间过期,请重新查询",
            "status": false
        }"#;

        let reply: QueryReply = serde_json::from_str(json).unwrap();

        assert_eq!(reply.status, Some(false));
        assert!(reply.data.is_none());
        assert_eq!(reply.messages.to_text(), "查询时间过期,请重新查询");
    }

    #[test]
    fn deserialize_message_array() {
        let json = r#"{
            "messages": ["网络繁忙", "请稍后重试"],
            "status": false
        }"#;

        let reply: QueryReply = serde_json::from_str(json).unwrap();

        assert!(!reply.messages.is_empty());
        assert_eq!(reply.messages.to_text(), "网络繁忙; 请稍后重试");
    }

    #[test]
    fn deserialize_empty_payload() {
        let json = r#"{"data": {}, "status": true}"#;

        let reply: QueryReply = serde_json::from_str(json).unwrap();

        let data = reply.data.unwrap();
        assert!(data.map.is_none());
        assert!(data.result.is_none());
    }

    #[test]
    fn missing_messages_field_defaults_empty() {
        let json = r#"{"status": true}"#;

        let reply: QueryReply = serde_json::from_str(json).unwrap();
        assert!(reply.messages.is_empty());
        assert_eq!(reply.messages.to_text(), "");
    }
}
