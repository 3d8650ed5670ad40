// Logging Tests

use crate::logging::*;
use std::cell::RefCell;

mod log_level_tests {
    use super::*;

    #[test]
    fn should_have_correct_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn should_display_labels() {
        assert_eq!(LogLevel::Debug.to_string(), "DEBUG");
        assert_eq!(LogLevel::Error.to_string(), "ERROR");
    }
}

mod console_logger_tests {
    use super::*;

    #[test]
    fn should_create_with_level() {
        let logger = ConsoleLogger::new(LogLevel::Warn);
        assert_eq!(logger.level(), LogLevel::Warn);
    }

    #[test]
    fn should_check_level_enabled() {
        let logger = ConsoleLogger::new(LogLevel::Warn);

        assert!(!logger.is_enabled(LogLevel::Debug));
        assert!(!logger.is_enabled(LogLevel::Info));
        assert!(logger.is_enabled(LogLevel::Warn));
        assert!(logger.is_enabled(LogLevel::Error));
    }
}

mod null_logger_tests {
    use super::*;

    #[test]
    fn should_not_log_anything() {
        let logger = NullLogger::new();

        // These should not panic
        logger.debug("debug message");
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");
        assert!(!logger.is_enabled(LogLevel::Debug));
    }
}

mod custom_logger_tests {
    use super::*;

    struct Recording {
        lines: RefCell<Vec<String>>,
    }

    impl Logger for Recording {
        fn level(&self) -> LogLevel {
            LogLevel::Info
        }
        fn debug(&self, msg: &str) {
            if self.is_enabled(LogLevel::Debug) {
                self.lines.borrow_mut().push(msg.to_string());
            }
        }
        fn info(&self, msg: &str) {
            self.lines.borrow_mut().push(msg.to_string());
        }
        fn warn(&self, msg: &str) {
            self.lines.borrow_mut().push(msg.to_string());
        }
        fn error(&self, msg: &str) {
            self.lines.borrow_mut().push(msg.to_string());
        }
    }

    #[test]
    fn should_filter_below_level() {
        let logger = Recording {
            lines: RefCell::new(Vec::new()),
        };
        logger.debug("hidden");
        logger.info("shown");

        assert_eq!(*logger.lines.borrow(), vec!["shown".to_string()]);
    }
}

mod boxed_logger_tests {
    use super::*;

    #[test]
    fn should_forward_through_box() {
        let logger: Box<dyn Logger> = Box::new(ConsoleLogger::new(LogLevel::Info));
        assert_eq!(logger.level(), LogLevel::Info);
        assert!(!logger.is_enabled(LogLevel::Debug));
    }
}
