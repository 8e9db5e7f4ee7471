mod fields;
mod profiles;
