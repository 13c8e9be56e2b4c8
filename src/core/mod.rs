pub mod action;
pub mod filter;
pub mod processor;
pub mod rules;

pub use crate::domain::model::{Plan, SharedSubscriber, Subscriber, SubscriberId};
pub use crate::domain::ports::{
    BoxedAction, BoxedFilter, SubscriberAction, SubscriberFilter, SubscriberRepository,
};
pub use crate::utils::error::{Result, SubscriberError};
