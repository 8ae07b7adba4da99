use derive_new::new;
use serde::{Deserialize, Serialize};

pub use conditions::*;
pub use duration::*;
pub use freq::*;
pub use plan::*;
pub use schedule::*;
pub use speed::*;
pub use timestamp::*;
pub use tournament::*;
pub use variant::*;

mod conditions;
mod duration;
mod freq;
mod plan;
mod schedule;
mod speed;
mod timestamp;
mod tournament;
mod variant;
