mod enums;
mod patch;
mod profile_update;
mod user_profile;
