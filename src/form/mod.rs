pub mod collector;
pub mod snapshot;
pub mod source;
pub mod validation;

pub use collector::collect_answers;
pub use snapshot::{load_form_snapshot, FormSnapshot, RadioGroup};
pub use source::{FormSource, RadioInput};
pub use validation::{validate_answers, ConsoleNotifier, Notifier, RecordingNotifier, ValidationReport};
