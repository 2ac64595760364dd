mod channel;

pub use channel::{ChannelNavigator, ChannelNotifier};
