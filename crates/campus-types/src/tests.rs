#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use crate::analytics::*;
    use crate::api::*;
    use crate::config::*;
    use crate::conversation::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;
    use crate::student::*;

    // ─── Conversation Tests ──────────────────────────────────

    #[test]
    fn test_conversation_id_generate_is_uuid_v4() {
        let id = ConversationId::generate();
        let parsed = uuid::Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_conversation_id_generate_unique() {
        let a = ConversationId::generate();
        let b = ConversationId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_conversation_id_serializes_as_plain_string() {
        let id = ConversationId::new("abc-123");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc-123""#);
        assert_eq!(id.to_string(), "abc-123");
    }

    #[test]
    fn test_conversation_provenance() {
        let c = Conversation::provisional(ConversationId::new("x"));
        assert!(c.is_provisional());
        let c = Conversation::acknowledged(ConversationId::new("x"));
        assert!(!c.is_provisional());
        assert_eq!(c.provenance, Provenance::Acknowledged);
    }

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_sender_from_role() {
        assert_eq!(Sender::from_role("user"), Sender::User);
        assert_eq!(Sender::from_role("assistant"), Sender::Agent);
        assert_eq!(Sender::from_role("system"), Sender::Agent);
        assert_eq!(Sender::from_role("User"), Sender::Agent);
    }

    #[test]
    fn test_chat_message_constructors() {
        let msg = ChatMessage::user(MessageId(7), "hello");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.content, "hello");
        assert_eq!(msg.id, MessageId(7));

        let msg = ChatMessage::agent(MessageId(8), "hi there");
        assert_eq!(msg.sender, Sender::Agent);
    }

    // ─── Wire Format Tests ───────────────────────────────────

    #[test]
    fn test_chat_request_new_session_sends_null() {
        let req = ChatRequest {
            message: "hello".to_string(),
            conversation_id: None,
        };
        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(json["message"], "hello");
        assert!(json["conversation_id"].is_null());
        assert!(json.as_object().unwrap().contains_key("conversation_id"));
    }

    #[test]
    fn test_chat_request_existing_session() {
        let req = ChatRequest {
            message: "again".to_string(),
            conversation_id: Some(ConversationId::new("c1")),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"message":"again","conversation_id":"c1"}"#);
    }

    #[test]
    fn test_chat_reply_deserialization() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"conversation_id":"c9","reply":"Hi!"}"#).unwrap();
        assert_eq!(reply.reply, "Hi!");
        assert_eq!(reply.conversation_id, ConversationId::new("c9"));
    }

    #[test]
    fn test_conversation_list_deserialization() {
        let list: ConversationList =
            serde_json::from_str(r#"{"conversation_ids":["a","b"]}"#).unwrap();
        assert_eq!(list.conversation_ids.len(), 2);
        assert_eq!(list.conversation_ids[0].as_str(), "a");
    }

    #[test]
    fn test_conversation_history_deserialization() {
        let json = r#"{
            "conversation_id": "c1",
            "messages": [
                {"role": "user", "content": "hi", "created_at": "2025-03-01 10:15:30.123456"},
                {"role": "assistant", "content": "hello", "created_at": "2025-03-01T10:15:31Z"}
            ]
        }"#;
        let history: ConversationHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.messages.len(), 2);
        assert_eq!(history.messages[0].sender(), Sender::User);
        assert_eq!(history.messages[1].sender(), Sender::Agent);
    }

    #[test]
    fn test_conversation_history_without_id() {
        let history: ConversationHistory = serde_json::from_str(r#"{"messages":[]}"#).unwrap();
        assert!(history.conversation_id.is_none());
        assert!(history.messages.is_empty());
    }

    #[test]
    fn test_parse_timestamp_naive_with_fraction() {
        let ts = parse_timestamp("2025-03-01 10:15:30.500000").unwrap();
        assert_eq!(ts.year(), 2025);
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.second(), 30);
    }

    #[test]
    fn test_parse_timestamp_naive_without_fraction() {
        let ts = parse_timestamp("2025-03-01 10:15:30").unwrap();
        assert_eq!(ts.minute(), 15);
    }

    #[test]
    fn test_parse_timestamp_rfc3339_offset() {
        let ts = parse_timestamp("2025-03-01T12:00:00+02:00").unwrap();
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(matches!(err, DashboardError::Serialization(_)));
    }

    // ─── Student Tests ───────────────────────────────────────

    #[test]
    fn test_student_deserialization_numeric_id() {
        let json = r#"{"id": 4, "name": "Ada", "department": "CS",
            "email": "ada@campus.edu", "last_active": "2025-02-10 08:00:00",
            "created_at": "2025-01-01 08:00:00"}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.id, StudentId::Number(4));
        assert_eq!(student.last_active_date().as_deref(), Some("2025-02-10"));
    }

    #[test]
    fn test_student_deserialization_text_id_and_missing_dates() {
        let json = r#"{"id": "S-100", "name": "Bo", "department": "EE", "email": "bo@x.io"}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.id, StudentId::Text("S-100".to_string()));
        assert!(student.last_active.is_none());
        assert!(student.last_active_date().is_none());
    }

    #[test]
    fn test_student_id_display() {
        assert_eq!(StudentId::Number(12).to_string(), "12");
        assert_eq!(StudentId::Text("A7".to_string()).to_string(), "A7");
    }

    #[test]
    fn test_new_student_has_exactly_four_fields() {
        let body = NewStudent {
            name: "Ada".to_string(),
            id: "S1".to_string(),
            department: "CS".to_string(),
            email: "ada@campus.edu".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        for key in ["name", "id", "department", "email"] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
    }

    #[test]
    fn test_analytics_report_deserialization() {
        let json = r#"{
            "total_students": 3,
            "by_department": [{"department": "CS", "count": 2}, {"department": "EE", "count": 1}],
            "recent_students": [{"id": 3, "name": "C", "department": "EE", "email": "c@x.io"}],
            "active_last_7_days": []
        }"#;
        let report: AnalyticsReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.total_students, 3);
        assert_eq!(report.by_department[0].count, 2);
        assert_eq!(report.recent_students.len(), 1);
        assert!(report.active_last_7_days.is_empty());
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_base, "http://127.0.0.1:8000");
        assert_eq!(config.redirect_delay_ms, 1500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_rejects_bad_base() {
        let mut config = DashboardConfig::default();
        config.api_base = "   ".to_string();
        assert!(matches!(config.validate(), Err(DashboardError::Config(_))));

        config.api_base = "ftp://campus".to_string();
        assert!(matches!(config.validate(), Err(DashboardError::Config(_))));
    }

    #[test]
    fn test_endpoints() {
        let endpoints = Endpoints::new("http://localhost:8000/");
        assert_eq!(endpoints.base(), "http://localhost:8000");
        assert_eq!(endpoints.conversations(), "http://localhost:8000/conversations");
        assert_eq!(
            endpoints.conversation(&ConversationId::new("c1")),
            "http://localhost:8000/conversations/c1"
        );
        assert_eq!(endpoints.chat(), "http://localhost:8000/chat");
        assert_eq!(endpoints.students(), "http://localhost:8000/students");
        assert_eq!(
            endpoints.student(&StudentId::Number(5)),
            "http://localhost:8000/students/5"
        );
        assert_eq!(endpoints.analytics(), "http://localhost:8000/analytics");
    }

    #[test]
    fn test_endpoints_escape_path_ids() {
        let endpoints = Endpoints::new("http://localhost:8000");
        assert_eq!(
            endpoints.conversation(&ConversationId::new("a/b?c#d e")),
            "http://localhost:8000/conversations/a%2Fb%3Fc%23d%20e"
        );
        assert_eq!(
            endpoints.conversation(&ConversationId::new("54efb819-1c2d-4e5f-8a9b-0c1d2e3f4a5b")),
            "http://localhost:8000/conversations/54efb819-1c2d-4e5f-8a9b-0c1d2e3f4a5b"
        );
        assert_eq!(
            endpoints.student(&StudentId::Text("S/01".to_string())),
            "http://localhost:8000/students/S%2F01"
        );
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = DashboardConfig {
            api_base: "http://campus.local".to_string(),
            redirect_delay_ms: 0,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: DashboardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    // ─── Route Tests ─────────────────────────────────────────

    #[test]
    fn test_route_default_is_chat() {
        assert_eq!(Route::default(), Route::Chat);
        assert_eq!(Route::all().len(), 4);
        assert_eq!(Route::AddStudent.label(), "Add Student");
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = DashboardError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = DashboardError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");

        let err: DashboardError = ValidationError::InvalidEmail.into();
        assert_eq!(
            err.to_string(),
            "Validation error: Please enter a valid email address."
        );
    }

    #[test]
    fn test_error_is_network() {
        assert!(DashboardError::Network("x".to_string()).is_network());
        assert!(DashboardError::Http {
            status: 404,
            message: String::new()
        }
        .is_network());
        assert!(!DashboardError::Validation(ValidationError::MissingField("name")).is_network());
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let err: DashboardError = serde_err.into();
        assert!(matches!(err, DashboardError::Serialization(_)));
    }
}
