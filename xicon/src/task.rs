use console::{style, Term};
use std::time::Instant;

/// Prints one numbered line per task with its elapsed time.
///
/// On a terminal the line shows up when the task starts and is rewritten in
/// place once it ends (kept and followed by the timed line with `verbose`).
/// Piped output gets the timed line only.
pub struct TaskRunner {
    term: Term,
    num_tasks: u32,
    current_task: u32,
    now: Instant,
    descr: String,
    verbose: bool,
}

impl TaskRunner {
    pub fn new(num_tasks: u32, verbose: bool) -> Self {
        Self {
            term: Term::stdout(),
            num_tasks,
            current_task: 0,
            now: Instant::now(),
            descr: "".into(),
            verbose,
        }
    }

    pub fn completed(&self) -> u32 {
        self.current_task
    }

    fn task_id(&self) -> String {
        style(format!("[{}/{}]", self.current_task + 1, self.num_tasks))
            .dim()
            .to_string()
    }

    pub fn start_task(&mut self, descr: impl Into<String>) {
        self.now = Instant::now();
        self.descr = descr.into();
        if self.term.is_term() {
            println!("{} {}", self.task_id(), &self.descr);
        }
    }

    pub fn end_task(&mut self) {
        if self.term.is_term() && !self.verbose {
            self.term.clear_last_lines(1).ok();
        }
        let time = self.now.elapsed();
        println!(
            "{} {} {}",
            self.task_id(),
            &self.descr,
            style(format!("[{}ms]", time.as_millis())).green()
        );
        self.current_task += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_finished_tasks() {
        let mut runner = TaskRunner::new(2, false);
        runner.start_task("one");
        runner.end_task();
        assert_eq!(runner.completed(), 1);
        runner.start_task("two");
        assert_eq!(runner.completed(), 1);
        runner.end_task();
        assert_eq!(runner.completed(), 2);
    }
}
