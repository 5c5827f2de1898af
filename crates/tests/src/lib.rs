#[cfg(test)]
mod common;

#[cfg(test)]
mod upstream_tests;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod team_tests;

#[cfg(test)]
mod add_member_tests;

#[cfg(test)]
mod session_middleware_tests;
