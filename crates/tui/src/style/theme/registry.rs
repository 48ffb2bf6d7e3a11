use super::registrations;
use super::types::Theme;

/// Look up a built-in theme by name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registrations()
		.iter()
		.find(|registration| registration.answers_to(name))
		.map(|registration| registration.theme)
}

/// Names of the built-in themes, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	let mut names: Vec<String> = registrations()
		.iter()
		.map(|registration| registration.name.clone())
		.collect();
	names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
	names
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_builtin_resolves_by_name() {
		let names = names();
		assert!(names.len() >= 2);
		for name in names {
			assert!(by_name(&name).is_some(), "theme `{name}` did not resolve");
		}
	}

	#[test]
	fn aliases_and_case_are_accepted() {
		assert_eq!(by_name("SLATE"), by_name("slate"));
		assert_eq!(by_name("day"), by_name("light"));
		assert!(by_name("no-such-theme").is_none());
	}
}
