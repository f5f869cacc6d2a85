use arc_tutor::render::SvgElement;
use arc_tutor::{AppCommand, AppController, AppIntent, AppState, StatusLevel, Step};

fn input(value: &str) -> AppIntent {
    AppIntent::InputChanged {
        value: value.to_string(),
    }
}

fn started(a: i32, b: i32) -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::with_seed(11);
    controller
        .handle_command(&mut state, AppCommand::StartTask { a, b })
        .expect("gültige Aufgabe sollte starten");
    (controller, state)
}

fn labels(state: &AppState) -> Vec<String> {
    state
        .view
        .canvas()
        .elements()
        .iter()
        .filter_map(|e| match e {
            SvgElement::Text(t) => Some(t.text.clone()),
            SvgElement::Arc(_) => None,
        })
        .collect()
}

fn arc_count(state: &AppState) -> usize {
    state
        .view
        .canvas()
        .elements()
        .iter()
        .filter(|e| matches!(e, SvgElement::Arc(_)))
        .count()
}

#[test]
fn test_new_task_requested_starts_valid_task_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::with_seed(5);

    controller
        .handle_intent(&mut state, AppIntent::NewTaskRequested)
        .expect("NewTaskRequested sollte ohne Fehler durchlaufen");

    let tutor = state.tutor.as_ref().expect("Tutor sollte aktiv sein");
    assert!(tutor.task().is_valid());
    assert_eq!(state.view.step(), Some(Step::First));
    assert!(state.view.input().visible);
    assert_eq!(arc_count(&state), 1);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert_eq!(last, &AppCommand::GenerateTask);
}

#[test]
fn test_full_solution_walkthrough() {
    let (mut controller, mut state) = started(7, 6);

    controller.handle_intent(&mut state, input("7")).unwrap();
    assert_eq!(state.view.step(), Some(Step::Second));
    assert_eq!(arc_count(&state), 2);
    assert_eq!(labels(&state), vec!["7"]);
    assert!(state.view.input().value.is_empty());

    controller.handle_intent(&mut state, input("6")).unwrap();
    assert_eq!(state.view.step(), Some(Step::Third));
    assert_eq!(labels(&state), vec!["7", "6"]);
    assert!(state.view.input().total_entry);

    // Tastendruck für Tastendruck: "1" ist noch falsch, "13" richtig
    controller.handle_intent(&mut state, input("1")).unwrap();
    assert_eq!(state.view.step(), Some(Step::Third));
    assert!(state.view.input().error);

    controller.handle_intent(&mut state, input("13")).unwrap();
    assert_eq!(state.view.step(), Some(Step::Solved));
    assert!(!state.view.input().visible);

    let title = state.view.title().expect("Titel gesetzt");
    assert!(title.solved);
    assert_eq!(title.to_string(), "7 + 6 = 13");
}

#[test]
fn test_command_log_follows_learner_session() {
    let (mut controller, mut state) = started(8, 5);
    for value in ["8", "4", "5"] {
        controller.handle_intent(&mut state, input(value)).unwrap();
    }

    let apply = |value: &str| AppCommand::ApplyInput {
        value: value.to_string(),
    };
    assert_eq!(
        state.command_log.entries(),
        &[
            AppCommand::StartTask { a: 8, b: 5 },
            apply("8"),
            apply("4"),
            apply("5"),
        ]
    );
    assert_eq!(state.view.step(), Some(Step::Third));
}

#[test]
fn test_wrong_first_entry_flags_error_and_stays() {
    let (mut controller, mut state) = started(7, 6);

    controller.handle_intent(&mut state, input("5")).unwrap();

    assert_eq!(state.view.step(), Some(Step::First));
    assert!(state.view.input().error);
    let tutor = state.tutor.as_ref().unwrap();
    assert!(tutor.task().errors.a);
    assert_eq!(
        state.view.title().unwrap().to_html(),
        "<span class=\"error\">7</span> + <span class=\"\">6</span> = ?"
    );

    // Korrektur setzt die Markierung zurück und schaltet weiter
    controller.handle_intent(&mut state, input("7")).unwrap();
    assert_eq!(state.view.step(), Some(Step::Second));
    assert!(!state.tutor.as_ref().unwrap().task().errors.a);
    assert!(!state.view.input().error);
}

#[test]
fn test_invalid_task_is_rejected_and_keeps_previous_state() {
    let (mut controller, mut state) = started(8, 4);

    let err = controller
        .handle_command(&mut state, AppCommand::StartTask { a: 9, b: 6 })
        .expect_err("Summe 15 ist ungültig");
    assert!(err.to_string().contains("is invalid"));

    assert_eq!(state.tutor.as_ref().unwrap().task().a, 8);
    assert_eq!(state.view.step(), Some(Step::First));
    let status = state.ui.status_message.as_ref().expect("Statusnachricht gesetzt");
    assert_eq!(status.level, StatusLevel::Warning);
    assert!(status.text.contains("[9 + 6 = ]"));
}

#[test]
fn test_input_without_task_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::with_seed(1);

    controller.handle_intent(&mut state, input("7")).unwrap();

    assert!(state.command_log.is_empty());
    assert_eq!(state.view.step(), None);
}

#[test]
fn test_new_task_replaces_progress() {
    let (mut controller, mut state) = started(6, 7);
    controller.handle_intent(&mut state, input("6")).unwrap();
    assert_eq!(arc_count(&state), 2);

    controller
        .handle_command(&mut state, AppCommand::StartTask { a: 9, b: 2 })
        .unwrap();

    assert_eq!(state.view.step(), Some(Step::First));
    assert_eq!(arc_count(&state), 1);
    assert!(labels(&state).is_empty());
    assert_eq!(state.tutor.as_ref().unwrap().solution().a, None);
}

#[test]
fn test_input_after_solved_is_ignored() {
    let (mut controller, mut state) = started(9, 5);
    for value in ["9", "5", "14"] {
        controller.handle_intent(&mut state, input(value)).unwrap();
    }
    assert_eq!(state.view.step(), Some(Step::Solved));

    controller.handle_intent(&mut state, input("3")).unwrap();
    assert_eq!(state.view.step(), Some(Step::Solved));
    assert!(state.view.title().unwrap().solved);
}

#[test]
fn test_export_svg_writes_document() {
    let (mut controller, mut state) = started(7, 6);
    controller.handle_intent(&mut state, input("7")).unwrap();

    let path = std::env::temp_dir().join(format!("arc_tutor_export_{}.svg", std::process::id()));
    let path_str = path.to_string_lossy().into_owned();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SvgExportPathSelected {
                path: path_str.clone(),
            },
        )
        .expect("Export sollte funktionieren");

    let content = std::fs::read_to_string(&path).expect("Datei sollte existieren");
    let _ = std::fs::remove_file(&path);

    assert!(content.contains("<g id=\"svg-main\">"));
    assert!(content.contains("M 34 311 Q 100.5 244.5 167 311"));
    assert!(content.contains(">7</text>"));
    assert_eq!(state.ui.last_export_path.as_deref(), Some(path_str.as_str()));

    // Erfolgsmeldung ist keine Warnung
    let status = state.ui.status_message.as_ref().expect("Statusnachricht gesetzt");
    assert_eq!(status.level, StatusLevel::Info);
    assert!(status.text.starts_with("Exportiert: "));
}

#[test]
fn test_export_requested_opens_dialog_flag() {
    let (mut controller, mut state) = started(7, 6);
    assert!(!state.ui.show_svg_export_dialog);

    controller
        .handle_intent(&mut state, AppIntent::ExportSvgRequested)
        .unwrap();
    assert!(state.ui.show_svg_export_dialog);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert_eq!(
        state.command_log.entries().last(),
        Some(&AppCommand::RequestExit)
    );
}
