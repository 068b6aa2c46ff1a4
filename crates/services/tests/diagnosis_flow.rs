//! End-to-end flow over in-memory storage: diagnose a mentee, read the
//! dashboard, plan a sprint and watch the counters move.

use growup_core::Clock;
use growup_core::model::{MaturityLevel, TaskPriority};
use growup_core::scoring::SliderScoring;
use growup_core::time::fixed_now;
use services::{
    AppServices, DiagnosisWizard, SprintComposer, WizardMode, WizardStep,
};
use storage::repository::Storage;

fn services_over(storage: &Storage) -> AppServices {
    AppServices::from_storage(storage, Clock::fixed(fixed_now()))
}

#[tokio::test]
async fn full_flow_from_diagnosis_to_sprint() {
    let storage = Storage::in_memory();
    let app = services_over(&storage);

    // Walk the wizard: name, program, one score per axis.
    let mut wizard = DiagnosisWizard::new(SliderScoring, WizardMode::AxisScore);
    wizard.submit_name("Ana Souza").unwrap();
    wizard.select_program("prog-exclusive").unwrap();
    let scores = ["1.5", "2.0", "3.5", "4.5", "2.5", "3.0", "1.0", "4.0"];
    for raw in scores {
        wizard.submit_answer(raw).unwrap();
    }
    assert_eq!(wizard.step(), WizardStep::Complete);
    assert_eq!(wizard.progress().percent(), 100);

    let outcome = wizard.into_outcome().unwrap();
    let mentee = app.diagnosis().submit(&outcome).await.unwrap();
    assert_eq!(mentee.program_id(), "prog-exclusive");

    // The dashboard shows eight pillars, all counters at zero.
    let overview = app.dashboard().overview(mentee.id()).await.unwrap();
    assert_eq!(overview.pillars.len(), 8);
    assert_eq!(overview.pillars[0].name(), "Sócios");
    assert_eq!(overview.pillars[0].level(), MaturityLevel::Red);
    assert_eq!(overview.pillars[3].level(), MaturityLevel::Green);
    assert_eq!(overview.metrics.total_tasks, 0);
    assert_eq!(overview.metrics.overall_progress, 0);

    // Plan a sprint against the weakest pillar.
    let mut composer = SprintComposer::new("Estratégia");
    composer.set_goal("Definir plano estratégico anual");
    composer
        .add_task("Agendar workshop de estratégia", false, TaskPriority::High, None)
        .unwrap();
    composer
        .add_task("Mapear diferenciais competitivos", true, TaskPriority::Medium, None)
        .unwrap();
    let sprint = composer.build(fixed_now()).unwrap();
    app.sprint_planning()
        .create_sprint(mentee.id(), &sprint)
        .await
        .unwrap();

    // Counters moved, progress is still zero until tasks complete.
    let overview = app.dashboard().overview(mentee.id()).await.unwrap();
    assert_eq!(overview.metrics.active_sprints, 1);
    assert_eq!(overview.metrics.total_tasks, 2);
    assert_eq!(overview.metrics.completed_tasks, 0);
    assert_eq!(overview.metrics.overall_progress, 0);

    let estrategia = overview
        .pillars
        .iter()
        .find(|p| p.name() == "Estratégia")
        .unwrap();
    assert_eq!(estrategia.sprints(), 1);
    assert_eq!(estrategia.tasks_total(), 2);

    // The mentee service sees the fresh record and can move programs.
    let latest = app.mentee_service().latest_mentee().await.unwrap().unwrap();
    assert_eq!(latest.id(), mentee.id());
    app.mentee_service()
        .change_program(mentee.id(), "prog-hibrido")
        .await
        .unwrap();
    let latest = app.mentee_service().latest_mentee().await.unwrap().unwrap();
    assert_eq!(latest.program_id(), "prog-hibrido");
}

#[tokio::test]
async fn second_diagnosis_creates_a_fresh_mentee() {
    let storage = Storage::in_memory();
    let app = services_over(&storage);

    for name in ["Ana", "Bruno"] {
        let mut wizard = DiagnosisWizard::new(SliderScoring, WizardMode::AxisScore);
        wizard.submit_name(name).unwrap();
        wizard.select_program("prog-start").unwrap();
        for _ in 0..8 {
            wizard.submit_answer("3").unwrap();
        }
        app.diagnosis()
            .submit(&wizard.into_outcome().unwrap())
            .await
            .unwrap();
    }

    let latest = app.mentee_service().latest_mentee().await.unwrap().unwrap();
    assert_eq!(latest.name(), "Bruno");

    // Each diagnosis owns its own pillar set.
    let overview = app.dashboard().overview(latest.id()).await.unwrap();
    assert_eq!(overview.pillars.len(), 8);
    assert!(
        overview
            .pillars
            .iter()
            .all(|p| p.level() == MaturityLevel::Blue)
    );
}
