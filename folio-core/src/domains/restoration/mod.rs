//! One-shot scroll restoration after returning from a project detail view

pub mod coordinator;

pub use coordinator::{
    ArrivalDecision, RestorationOutcome, RestorationState,
    ScrollRestorationCoordinator, request_back_with_restore,
};
