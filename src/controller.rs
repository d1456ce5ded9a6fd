pub mod events;
pub mod films;
pub mod news;
pub mod newsletter;
pub mod sponsors;
pub mod status;
pub mod submissions;
pub mod updates;
