//! Drives the state machines with real tokio timers on a paused clock,
//! the same way the desktop app schedules them.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use portfolio_core::{
    DemoSimulator, PreviewFailure, PreviewState, ResumePreview, TypingConfig, TypingEffect,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("portfolio_core=debug")
        .with_test_writer()
        .try_init();
}

#[tokio::test(start_paused = true)]
async fn typing_driver_loop() {
    init_tracing();
    let effect = Arc::new(Mutex::new(
        TypingEffect::new(vec!["AB".into(), "C".into()], TypingConfig::default()).unwrap(),
    ));

    let driver = {
        let effect = effect.clone();
        tokio::spawn(async move {
            loop {
                let delay = effect.lock().unwrap().delay();
                tokio::time::sleep(delay).await;
                effect.lock().unwrap().tick();
            }
        })
    };

    tokio::time::sleep(Duration::from_millis(210)).await;
    assert_eq!(effect.lock().unwrap().displayed(), "AB");

    tokio::time::sleep(Duration::from_millis(2100)).await;
    {
        let fx = effect.lock().unwrap();
        assert_eq!(fx.displayed(), "");
        assert_eq!(fx.current_phrase(), "C");
    }

    // Teardown cancels the timer; state freezes
    driver.abort();
    let _ = driver.await;
    let before = effect.lock().unwrap().displayed().to_string();
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(effect.lock().unwrap().displayed(), before);
}

#[tokio::test(start_paused = true)]
async fn resume_fallback_timer_fires() {
    init_tracing();
    let preview = Arc::new(Mutex::new(ResumePreview::default()));
    let token = preview.lock().unwrap().open();

    let timer = {
        let preview = preview.clone();
        tokio::spawn(async move {
            tokio::time::sleep(token.timeout()).await;
            preview.lock().unwrap().on_timeout(token)
        })
    };

    assert!(timer.await.unwrap());
    assert_eq!(
        preview.lock().unwrap().state(),
        PreviewState::Errored(PreviewFailure::TimedOut)
    );
}

#[tokio::test(start_paused = true)]
async fn resume_success_beats_timer() {
    let preview = Arc::new(Mutex::new(ResumePreview::default()));
    let token = preview.lock().unwrap().open();

    let timer = {
        let preview = preview.clone();
        tokio::spawn(async move {
            tokio::time::sleep(token.timeout()).await;
            preview.lock().unwrap().on_timeout(token)
        })
    };

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(preview.lock().unwrap().on_rendered());

    // Timer still fires but its token is stale
    assert!(!timer.await.unwrap());
    assert_eq!(preview.lock().unwrap().state(), PreviewState::Loaded);
}

#[tokio::test(start_paused = true)]
async fn demo_run_takes_schedule_duration() {
    init_tracing();
    let sim = Arc::new(Mutex::new(DemoSimulator::default()));
    let mut rng = StdRng::seed_from_u64(5);
    let run = sim.lock().unwrap().run(&mut rng).unwrap();

    let start = tokio::time::Instant::now();
    let driver = {
        let sim = sim.clone();
        tokio::spawn(async move {
            for (wait, step) in run.remaining_steps() {
                tokio::time::sleep(wait).await;
                sim.lock().unwrap().apply(&run, step);
            }
        })
    };

    tokio::time::sleep(Duration::from_millis(700)).await;
    {
        let sim = sim.lock().unwrap();
        assert!(sim.is_running());
        assert!(sim.frame().show_response);
    }
    // Second trigger mid-run is rejected
    assert!(sim.lock().unwrap().run(&mut rng).is_none());

    driver.await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(1500));
    assert!(!sim.lock().unwrap().is_running());
}
