use campus_domain::student::Student;
use campus_enrollment::{CreditLimitRule, PrerequisiteRule, RegistrationService};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory sink for the fmt subscriber.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Write for Capture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs(run: impl FnOnce()) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::with_default(subscriber, run);
    capture.contents()
}

fn standard() -> RegistrationService {
    RegistrationService::new(vec![Box::new(CreditLimitRule::default()), Box::new(PrerequisiteRule)])
}

#[test]
fn accepted_registration_logs_every_rule() {
    let logs = capture_logs(|| {
        assert!(standard().register(&Student::new("Andi", 20, true)));
    });

    assert!(logs.contains("Registration started"));
    assert!(logs.contains("Credit load check passed for Andi (20 credits)"));
    assert!(logs.contains("Prerequisite check passed for Andi"));
    assert!(logs.contains("Registration accepted"));
    assert!(!logs.contains("WARN"));
}

#[test]
fn rejected_registration_names_failing_rule() {
    let logs = capture_logs(|| {
        assert!(!standard().register(&Student::new("Budi", 26, false)));
    });

    assert!(logs.contains("WARN"));
    assert!(logs.contains("above the limit of 24"));
    assert!(logs.contains("Registration rejected"));
    assert!(logs.contains("rule=\"credit_limit\""));
    assert!(!logs.contains("Prerequisite check"), "prerequisite rule must not run");
}

#[test]
fn reordered_rules_log_a_different_failure_point() {
    let reordered = RegistrationService::new(vec![
        Box::new(PrerequisiteRule),
        Box::new(CreditLimitRule::default()),
    ]);

    let logs = capture_logs(|| {
        assert!(!reordered.register(&Student::new("Budi", 26, false)));
    });

    assert!(logs.contains("Prerequisite check failed"));
    assert!(!logs.contains("Credit load check"));
}
