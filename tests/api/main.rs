mod health_check;
mod news;
mod newsletter;
mod sponsors;
mod submissions;
mod updates;
