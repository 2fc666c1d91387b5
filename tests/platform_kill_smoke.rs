use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use sysmon::system::kill::{KillResult, SignalTerminator, Terminator};

fn spawn_long_lived_child() -> Child {
    Command::new("sh")
        .args(["-c", "sleep 30"])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn child process")
}

#[test]
fn terminate_nonexistent_pid_returns_not_found() {
    let mut terminator = SignalTerminator::new();
    let result = terminator.terminate(u32::MAX);
    assert!(matches!(result, KillResult::NotFound(_)));
    assert_eq!(result.message(), format!("Process {} not found", u32::MAX));
}

#[test]
fn terminate_spawned_child_exits() {
    let mut child = spawn_long_lived_child();
    let pid = child.id();

    let mut terminator = SignalTerminator::new();
    let mut result = terminator.terminate(pid);
    let deadline = Instant::now() + Duration::from_secs(3);
    // the child may not be visible the instant spawn returns
    while matches!(result, KillResult::NotFound(_)) && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(50));
        result = terminator.terminate(pid);
    }

    match result {
        KillResult::Success(sent, signal) => {
            assert_eq!(sent, pid);
            assert_eq!(signal, "SIGTERM");
            let deadline = Instant::now() + Duration::from_secs(5);
            loop {
                match child.try_wait() {
                    Ok(Some(_)) => break,
                    Ok(None) if Instant::now() < deadline => {
                        thread::sleep(Duration::from_millis(50));
                    }
                    Ok(None) => {
                        let _ = child.kill();
                        panic!("child process did not exit before timeout");
                    }
                    Err(err) => {
                        let _ = child.kill();
                        panic!("failed waiting for child exit: {err}");
                    }
                }
            }
        }
        other => {
            let _ = child.kill();
            panic!("terminate did not succeed: {}", other.message());
        }
    }
}
