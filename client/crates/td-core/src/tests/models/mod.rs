mod avatar;
mod identity;
mod project;
mod task;
