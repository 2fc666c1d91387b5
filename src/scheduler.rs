//! The tick loop. Input reads time out after the tick rate; each wake-up,
//! with or without a key, runs one sample/derive/sort/render pass.

use color_eyre::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::action::Action;
use crate::app::App;
use crate::event::{Event, InputSource};
use crate::prompt::run_kill_prompt;
use crate::system::kill::Terminator;
use crate::ui;

/// Throwaway sample plus a short pause so the first tick has a real window.
pub async fn warm_up(app: &mut App) {
    app.collector.prime();
    tokio::time::sleep(app.warmup).await;
}

pub async fn run<B, I, T>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    input: &mut I,
    terminator: &mut T,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    I: InputSource,
    T: Terminator,
{
    app.refresh_data();
    terminal.draw(|frame| ui::draw(frame, app, None))?;

    while app.running {
        if let Some(Event::Key(key)) = input.next_event(Some(app.tick_rate)).await? {
            match app.map_key(key) {
                Action::OpenKillPrompt => {
                    let outcome = run_kill_prompt(input, |prompt| {
                        terminal.draw(|frame| ui::draw(frame, app, Some(prompt)))?;
                        Ok(())
                    })
                    .await?;
                    app.finish_kill_prompt(outcome, terminator);
                    terminal.clear()?;
                }
                action => app.dispatch(action),
            }
        }
        if !app.running {
            break;
        }

        app.refresh_data();
        terminal.draw(|frame| ui::draw(frame, app, None))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyCode;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::config::Config;
    use crate::event::ScriptedInput;
    use crate::system::collector::Collector;
    use crate::system::fixture::FakeProc;
    use crate::system::kill::RecordingTerminator;
    use crate::system::sort::SortMode;
    use crate::system::users::UserTable;
    use crate::ui::buffer_to_string;

    fn fixture(name: &str) -> FakeProc {
        let fake = FakeProc::new(name);
        fake.write_stat("cpu 100 0 50 850 0 0 0 0");
        fake.write_meminfo(8_000_000, 2_000_000);
        fake.add_process(1234, "worker", 0, 100_000, 10, 5);
        fake.add_process(7, "init", 0, 400_000, 90, 10);
        fake.add_process(300, "editor", 1000, 50_000, 1, 1);
        fake
    }

    fn make_app(fake: &FakeProc) -> App {
        let users = UserTable::from_entries([(0, "root".to_string()), (1000, "dev".to_string())]);
        let mut app = App::with_collector(Config::default(), Collector::new(fake.root(), users));
        app.tick_rate = Duration::from_millis(5);
        app.warmup = Duration::ZERO;
        app
    }

    #[tokio::test]
    async fn kill_prompt_sends_one_request_then_quit() {
        let fake = fixture("scheduler_kill");
        let mut app = make_app(&fake);
        warm_up(&mut app).await;

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let mut input = ScriptedInput::new()
            .chars("k1234")
            .key(KeyCode::Enter)
            .chars("q");
        let mut terminator = RecordingTerminator::default();

        run(&mut terminal, &mut app, &mut input, &mut terminator)
            .await
            .unwrap();

        assert_eq!(terminator.sent, vec![1234]);
        assert!(!app.running);
        let screen = buffer_to_string(terminal.backend().buffer());
        assert!(screen.contains("Sent SIGTERM to PID 1234"));
    }

    #[tokio::test]
    async fn cancelled_prompt_sends_nothing() {
        let fake = fixture("scheduler_cancel");
        let mut app = make_app(&fake);

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let mut input = ScriptedInput::new()
            .chars("k12")
            .key(KeyCode::Esc)
            .idle()
            .chars("q");
        let mut terminator = RecordingTerminator::default();

        run(&mut terminal, &mut app, &mut input, &mut terminator)
            .await
            .unwrap();

        assert!(terminator.sent.is_empty());
        assert!(app.status_message.is_none());
    }

    #[tokio::test]
    async fn ctrl_c_inside_prompt_exits_loop() {
        let fake = fixture("scheduler_prompt_ctrl_c");
        let mut app = make_app(&fake);

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        // Nothing follows the Ctrl+C, so only a clean exit ends the run.
        let mut input = ScriptedInput::new().chars("k12").ctrl('c');
        let mut terminator = RecordingTerminator::default();

        run(&mut terminal, &mut app, &mut input, &mut terminator)
            .await
            .unwrap();

        assert!(!app.running);
        assert!(terminator.sent.is_empty());
        assert_eq!(input.remaining(), 0);
    }

    #[tokio::test]
    async fn sort_key_reorders_rendered_table() {
        let fake = fixture("scheduler_sort");
        let mut app = make_app(&fake);
        warm_up(&mut app).await;

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let mut input = ScriptedInput::new().idle().chars("p").idle().chars("q");
        let mut terminator = RecordingTerminator::default();

        run(&mut terminal, &mut app, &mut input, &mut terminator)
            .await
            .unwrap();

        assert_eq!(app.sort_mode, SortMode::Pid);
        let pids: Vec<u32> = app.snapshot.processes.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![7, 300, 1234]);

        let screen = buffer_to_string(terminal.backend().buffer());
        let lines: Vec<&str> = screen.lines().collect();
        assert!(lines[0].contains("Sort: PID"));
        assert!(lines[4].starts_with("7 "));
        assert!(lines[5].starts_with("300 "));
        assert!(lines[6].starts_with("1234 "));
        assert!(lines[6].contains("root"));
        assert!(lines[5].contains("dev"));
    }

    #[tokio::test]
    async fn unchanged_counters_read_as_idle() {
        let fake = fixture("scheduler_idle");
        let mut app = make_app(&fake);
        warm_up(&mut app).await;

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let mut input = ScriptedInput::new().idle().chars("m").chars("q");
        run(
            &mut terminal,
            &mut app,
            &mut input,
            &mut RecordingTerminator::default(),
        )
        .await
        .unwrap();

        assert_eq!(app.snapshot.cpu_usage_percent, 0.0);
        assert!(app.snapshot.processes.iter().all(|p| p.cpu_percent == 0.0));
        // memory sort: init (400 MB) first
        assert_eq!(app.snapshot.processes[0].pid, 7);
        assert!((app.snapshot.processes[0].mem_percent - 5.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn closed_input_ends_loop_with_error() {
        let fake = fixture("scheduler_closed");
        let mut app = make_app(&fake);

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        // The prompt reads without a timeout, so a drained script errors.
        let mut input = ScriptedInput::new().chars("k1");
        let result = run(
            &mut terminal,
            &mut app,
            &mut input,
            &mut RecordingTerminator::default(),
        )
        .await;
        assert!(result.is_err());
    }
}
