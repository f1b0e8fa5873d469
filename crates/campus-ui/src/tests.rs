#[cfg(test)]
mod tests {
    use crate::state::*;
    use campus_core::message_log::FAILED_REPLY_TEXT;
    use campus_core::session::SendState;
    use campus_types::api::{ChatReply, ConversationHistory, HistoryEntry};
    use campus_types::config::DashboardConfig;
    use campus_types::conversation::ConversationId;
    use campus_types::event::{DashboardEvent, Route};
    use campus_types::student::{NewStudent, Student, StudentId};
    use campus_types::DashboardError;

    fn cid(id: &str) -> ConversationId {
        ConversationId::new(id)
    }

    fn network_error() -> DashboardError {
        DashboardError::Network("connection refused".to_string())
    }

    fn fill_form(state: &mut UiState, email: &str) {
        state.student_form.name = "Ada Lovelace".to_string();
        state.student_form.id = "S-001".to_string();
        state.student_form.department = "Computer Science".to_string();
        state.student_form.email = email.to_string();
    }

    fn created(name: &str, id: &str) -> Student {
        Student {
            id: StudentId::Text(id.to_string()),
            name: name.to_string(),
            department: "Computer Science".to_string(),
            email: "ada@campus.edu".to_string(),
            last_active: None,
            created_at: None,
        }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new(&DashboardConfig::default());
        assert_eq!(state.route, Route::Chat);
        assert!(state.session.directory().is_empty());
        assert!(state.notifications.is_empty());
        assert!(!state.submitting);
        assert!(!state.show_settings);
        assert_eq!(state.redirect_delay_ms, 1500);
        assert_eq!(state.status_text(), "Ready");
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_startup_loads_conversations() {
        let mut state = UiState::default();
        let commands = state.startup();
        assert_eq!(commands, vec![UiCommand::LoadConversations]);
        assert!(state.session.is_loading_directory());
        assert_eq!(state.status_text(), "Loading conversations...");
    }

    // ─── Chat Tests ──────────────────────────────────────────

    #[test]
    fn test_conversations_loaded_fetches_first() {
        let mut state = UiState::default();
        state.startup();
        let commands = state.process_events(vec![DashboardEvent::ConversationsLoaded(Ok(vec![
            cid("c1"),
            cid("c2"),
        ]))]);
        assert_eq!(commands, vec![UiCommand::FetchHistory(cid("c1"))]);
        assert_eq!(state.session.selected(), Some(&cid("c1")));

        state.process_events(vec![DashboardEvent::HistoryLoaded {
            conversation_id: cid("c1"),
            result: Ok(ConversationHistory {
                conversation_id: None,
                messages: vec![HistoryEntry {
                    role: "user".to_string(),
                    content: "hi".to_string(),
                    created_at: "2025-03-01 10:00:00".to_string(),
                }],
            }),
        }]);
        assert_eq!(state.session.log().len(), 1);
    }

    #[test]
    fn test_conversations_failure_shows_empty() {
        let mut state = UiState::default();
        state.startup();
        let commands =
            state.process_events(vec![DashboardEvent::ConversationsLoaded(Err(network_error()))]);
        assert!(commands.is_empty());
        assert!(state.session.directory().is_empty());
        assert_eq!(state.status_text(), "Ready");
    }

    #[test]
    fn test_submit_message_round_trip() {
        let mut state = UiState::default();
        state.session.set_compose("hello");

        let commands = state.submit_message();
        assert_eq!(commands.len(), 1);
        let UiCommand::SendMessage(outgoing) = &commands[0] else {
            panic!("expected SendMessage, got {:?}", commands[0]);
        };
        assert_eq!(outgoing.request.message, "hello");
        assert!(outgoing.request.conversation_id.is_none());
        assert_eq!(state.session.log().len(), 1);
        assert!(state.is_busy());

        state.process_events(vec![DashboardEvent::ReplyReceived {
            ticket: outgoing.ticket,
            result: Ok(ChatReply {
                reply: "Hi! How can I help?".to_string(),
                conversation_id: cid("server-1"),
            }),
        }]);
        assert_eq!(state.session.state(), SendState::Idle);
        assert_eq!(state.session.selected(), Some(&cid("server-1")));
        assert_eq!(state.session.log().len(), 2);
    }

    #[test]
    fn test_submit_blank_message_does_nothing() {
        let mut state = UiState::default();
        state.session.set_compose("   ");
        assert!(state.submit_message().is_empty());
        assert!(state.session.log().is_empty());
    }

    #[test]
    fn test_failed_reply_shows_placeholder() {
        let mut state = UiState::default();
        state.session.set_compose("hello");
        let commands = state.submit_message();
        let UiCommand::SendMessage(outgoing) = &commands[0] else {
            panic!("expected SendMessage");
        };

        state.process_events(vec![DashboardEvent::ReplyReceived {
            ticket: outgoing.ticket,
            result: Err(network_error()),
        }]);
        assert_eq!(state.session.log().last().unwrap().content, FAILED_REPLY_TEXT);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_select_conversation_commands() {
        let mut state = UiState::default();
        state.process_events(vec![DashboardEvent::ConversationsLoaded(Ok(vec![
            cid("c1"),
            cid("c2"),
        ]))]);

        assert_eq!(
            state.select_conversation(cid("c2")),
            vec![UiCommand::FetchHistory(cid("c2"))]
        );

        let local = state.new_conversation();
        assert_eq!(state.session.selected(), Some(&local));
        assert!(state.select_conversation(local).is_empty());
    }

    fn send(state: &mut UiState, text: &str) -> campus_core::session::OutgoingMessage {
        state.session.set_compose(text);
        let mut commands = state.submit_message();
        match commands.pop() {
            Some(UiCommand::SendMessage(outgoing)) => outgoing,
            other => panic!("expected SendMessage, got {:?}", other),
        }
    }

    #[test]
    fn test_new_chat_survives_late_directory_load() {
        let mut state = UiState::default();
        state.startup();
        let local = state.new_conversation();

        let commands = state.process_events(vec![DashboardEvent::ConversationsLoaded(Ok(vec![cid("a")]))]);
        assert!(commands.is_empty());
        assert_eq!(state.session.selected(), Some(&local));
        assert!(state.session.directory().contains(&local));
        assert!(state.session.directory().contains(&cid("a")));
        assert_eq!(state.session.directory().first(), Some(&local));
    }

    #[test]
    fn test_message_sent_during_history_fetch_is_kept() {
        let mut state = UiState::default();
        state.process_events(vec![DashboardEvent::ConversationsLoaded(Ok(vec![cid("a")]))]);
        assert!(state.session.is_loading_history());

        send(&mut state, "hello while loading");
        state.process_events(vec![DashboardEvent::HistoryLoaded {
            conversation_id: cid("a"),
            result: Ok(ConversationHistory {
                conversation_id: None,
                messages: vec![HistoryEntry {
                    role: "user".to_string(),
                    content: "older".to_string(),
                    created_at: "2025-03-01 10:00:00".to_string(),
                }],
            }),
        }]);

        let contents: Vec<&str> = state
            .session
            .log()
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["older", "hello while loading"]);
    }

    #[test]
    fn test_switch_backend_ignores_old_reply() {
        let mut state = UiState::default();
        let old = send(&mut state, "old server question");

        let commands = state.switch_backend();
        assert_eq!(commands, vec![UiCommand::LoadConversations]);
        assert!(state.session.log().is_empty());

        let new = send(&mut state, "new server question");
        assert_ne!(old.ticket, new.ticket);

        state.process_events(vec![DashboardEvent::ReplyReceived {
            ticket: old.ticket,
            result: Ok(ChatReply {
                reply: "OLD SERVER REPLY".to_string(),
                conversation_id: cid("old-conv"),
            }),
        }]);
        assert_eq!(state.session.log().len(), 1);
        assert!(state.session.selected().is_none());
        assert!(!state.session.directory().contains(&cid("old-conv")));
        assert_eq!(state.session.in_flight(), 1);

        state.process_events(vec![DashboardEvent::ReplyReceived {
            ticket: new.ticket,
            result: Ok(ChatReply {
                reply: "new reply".to_string(),
                conversation_id: cid("new-conv"),
            }),
        }]);
        assert_eq!(state.session.log().last().unwrap().content, "new reply");
        assert_eq!(state.session.selected(), Some(&cid("new-conv")));
    }

    #[test]
    fn test_switch_backend_reloads_current_page() {
        let mut state = UiState::default();
        state.navigate(Route::Students);
        state.submitting = true;
        let commands = state.switch_backend();
        assert!(!state.submitting);
        assert_eq!(
            commands,
            vec![UiCommand::LoadConversations, UiCommand::LoadStudents]
        );
    }

    // ─── Navigation Tests ────────────────────────────────────

    #[test]
    fn test_navigate_loads_page_data() {
        let mut state = UiState::default();

        assert_eq!(state.navigate(Route::Students), vec![UiCommand::LoadStudents]);
        assert_eq!(state.route, Route::Students);
        assert!(state.roster.is_loading());

        assert_eq!(state.navigate(Route::Analytics), vec![UiCommand::LoadAnalytics]);
        assert!(state.analytics.is_loading());

        assert!(state.navigate(Route::Chat).is_empty());
        assert_eq!(state.route, Route::Chat);
    }

    #[test]
    fn test_navigate_event_is_applied() {
        let mut state = UiState::default();
        state.route = Route::AddStudent;
        let commands = state.process_events(vec![DashboardEvent::Navigate(Route::Students)]);
        assert_eq!(state.route, Route::Students);
        assert_eq!(commands, vec![UiCommand::LoadStudents]);
    }

    #[test]
    fn test_navigate_to_add_student_clears_form() {
        let mut state = UiState::default();
        fill_form(&mut state, "ada@campus.edu");
        state.navigate(Route::AddStudent);
        assert!(state.student_form.name.is_empty());
    }

    // ─── Add Student Tests ───────────────────────────────────

    #[test]
    fn test_invalid_email_sends_nothing() {
        let mut state = UiState::default();
        fill_form(&mut state, "not-an-email");

        let commands = state.submit_student_form();
        assert!(commands.is_empty());
        assert!(!state.submitting);
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].level, NoticeLevel::Error);
        assert_eq!(state.notifications[0].message, "Please enter a valid email address.");
    }

    #[test]
    fn test_missing_field_sends_nothing() {
        let mut state = UiState::default();
        fill_form(&mut state, "ada@campus.edu");
        state.student_form.department.clear();

        assert!(state.submit_student_form().is_empty());
        assert!(state.notifications[0].message.contains("required fields"));
    }

    #[test]
    fn test_valid_form_creates_once() {
        let mut state = UiState::default();
        fill_form(&mut state, "ada@campus.edu");

        let commands = state.submit_student_form();
        assert_eq!(
            commands,
            vec![UiCommand::CreateStudent(NewStudent {
                name: "Ada Lovelace".to_string(),
                id: "S-001".to_string(),
                department: "Computer Science".to_string(),
                email: "ada@campus.edu".to_string(),
            })]
        );
        assert!(state.submitting);

        // A second click while the request is outstanding is ignored
        assert!(state.submit_student_form().is_empty());
    }

    #[test]
    fn test_student_created_notifies_and_redirects() {
        let mut state = UiState::default();
        state.redirect_delay_ms = 250;
        fill_form(&mut state, "ada@campus.edu");
        state.submit_student_form();

        let commands =
            state.process_events(vec![DashboardEvent::StudentCreated(Ok(created("Ada Lovelace", "S-001")))]);
        assert_eq!(
            commands,
            vec![UiCommand::NavigateLater {
                route: Route::Students,
                delay_ms: 250,
            }]
        );
        assert!(!state.submitting);
        assert!(state.student_form.email.is_empty());
        assert_eq!(state.notifications[0].level, NoticeLevel::Info);
        assert_eq!(
            state.notifications[0].message,
            "Student Ada Lovelace has been added with ID S-001."
        );
    }

    #[test]
    fn test_student_create_failure_keeps_form() {
        let mut state = UiState::default();
        fill_form(&mut state, "ada@campus.edu");
        state.submit_student_form();

        let commands = state.process_events(vec![DashboardEvent::StudentCreated(Err(
            DashboardError::Http {
                status: 500,
                message: "boom".to_string(),
            },
        ))]);
        assert!(commands.is_empty());
        assert!(!state.submitting);
        assert_eq!(state.student_form.name, "Ada Lovelace");
        assert_eq!(state.notifications[0].level, NoticeLevel::Error);
        assert_eq!(
            state.notifications[0].message,
            "Failed to add student. Please try again."
        );
    }

    // ─── Roster Tests ────────────────────────────────────────

    #[test]
    fn test_delete_student_flow() {
        let mut state = UiState::default();
        state.process_events(vec![DashboardEvent::StudentsLoaded(Ok(vec![
            created("Ada", "1"),
            created("Grace", "2"),
        ]))]);

        let id = StudentId::Text("1".to_string());
        assert_eq!(
            state.delete_student(id.clone()),
            vec![UiCommand::DeleteStudent(id.clone())]
        );
        // Still listed until the backend confirms
        assert_eq!(state.roster.students().len(), 2);

        state.process_events(vec![DashboardEvent::StudentDeleted {
            id,
            result: Ok(()),
        }]);
        assert_eq!(state.roster.students().len(), 1);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_delete_student_failure_notifies() {
        let mut state = UiState::default();
        state.process_events(vec![DashboardEvent::StudentsLoaded(Ok(vec![created("Ada", "1")]))]);
        state.process_events(vec![DashboardEvent::StudentDeleted {
            id: StudentId::Text("1".to_string()),
            result: Err(network_error()),
        }]);
        assert_eq!(state.roster.students().len(), 1);
        assert_eq!(state.notifications.len(), 1);
    }

    #[test]
    fn test_analytics_loaded_failure() {
        let mut state = UiState::default();
        state.navigate(Route::Analytics);
        state.process_events(vec![DashboardEvent::AnalyticsLoaded(Err(network_error()))]);
        assert!(!state.analytics.is_loading());
        assert!(state.analytics.summary().is_none());
    }

    // ─── Notification Tests ──────────────────────────────────

    #[test]
    fn test_dismiss_notification() {
        let mut state = UiState::default();
        state.notify(NoticeLevel::Info, "One", "first");
        state.notify(NoticeLevel::Error, "Two", "second");
        state.dismiss(0);
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].title, "Two");
        state.dismiss(5);
        assert_eq!(state.notifications.len(), 1);
    }
}
