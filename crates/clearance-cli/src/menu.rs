//! Interactive console driver.
//!
//! The loop reads menu selections from any `BufRead` and writes to any
//! `Write`, so tests can drive it with scripted input. Save and load
//! failures are reported and the loop continues; only the exit selection
//! (or end of input) ends it.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{error, info};

use clearance_domain::{DomainResult, Resource, User};
use clearance_storage::{archive, ArchiveResult, Directory};

/// The interactive application: one directory per entity kind plus the
/// archive paths they persist to.
pub struct App {
    users: Directory<User>,
    resources: Directory<Resource>,
    users_path: PathBuf,
    resources_path: PathBuf,
}

impl App {
    /// Creates an application with empty directories.
    pub fn new(users_path: impl AsRef<Path>, resources_path: impl AsRef<Path>) -> Self {
        Self {
            users: Directory::new(),
            resources: Directory::new(),
            users_path: users_path.as_ref().to_path_buf(),
            resources_path: resources_path.as_ref().to_path_buf(),
        }
    }

    /// Populates the directories with the sample data set.
    pub fn seed(&mut self) -> DomainResult<()> {
        self.users.add(User::student("Alice", 1, 2, "CS-101")?);
        self.users
            .add(User::teacher("Dr. Smith", 2, 5, "Computer Science")?);
        self.users.add(User::administrator("Root", 3, 10)?);

        self.resources.add(Resource::new("Library", 3)?);
        self.resources.add(Resource::new("Laboratory 101", 4)?);
        self.resources.add(Resource::new("Conference Hall", 6)?);
        Ok(())
    }

    pub fn users(&self) -> &Directory<User> {
        &self.users
    }

    pub fn resources(&self) -> &Directory<Resource> {
        &self.resources
    }

    /// Runs the menu loop until the exit selection or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            print_menu(out)?;
            let Some(line) = lines.next() else { break };
            match line?.trim() {
                "1" => self.users.display_all(out)?,
                "2" => self.resources.display_all(out)?,
                "3" => {
                    writeln!(out, "Full user name:")?;
                    let Some(name) = lines.next() else { break };
                    self.report_access(name?.trim(), out)?;
                }
                "4" => self.save(out)?,
                "5" => self.load(out)?,
                "0" => {
                    writeln!(out, "Bye.")?;
                    break;
                }
                other => writeln!(out, "Unrecognized selection: {other:?}")?,
            }
        }
        Ok(())
    }

    /// Per-resource access report for every user matching `name` exactly.
    fn report_access<W: Write>(&self, name: &str, out: &mut W) -> io::Result<()> {
        let matches = self.users.find_by_name(name);
        if matches.is_empty() {
            writeln!(out, "No user named {name:?}.")?;
            return Ok(());
        }
        for user in matches {
            writeln!(out, "Access for {} (level {}):", user.name(), user.access_level())?;
            for resource in &self.resources {
                let verdict = if user.can_access(resource) {
                    "granted"
                } else {
                    "denied"
                };
                writeln!(out, "  {} -> {}", resource.name(), verdict)?;
            }
        }
        Ok(())
    }

    fn save<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.try_save() {
            Ok(()) => {
                info!(
                    users = self.users.len(),
                    resources = self.resources.len(),
                    "archives saved"
                );
                writeln!(
                    out,
                    "Saved {} users and {} resources.",
                    self.users.len(),
                    self.resources.len()
                )
            }
            Err(e) => {
                error!(error = %e, "save failed");
                writeln!(out, "Save failed: {e}")
            }
        }
    }

    fn try_save(&self) -> ArchiveResult<()> {
        archive::save_to_path(&self.users, &self.users_path)?;
        archive::save_to_path(&self.resources, &self.resources_path)?;
        Ok(())
    }

    fn load<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.try_load() {
            Ok(()) => {
                info!(
                    users = self.users.len(),
                    resources = self.resources.len(),
                    "archives loaded"
                );
                writeln!(
                    out,
                    "Loaded {} users and {} resources.",
                    self.users.len(),
                    self.resources.len()
                )
            }
            Err(e) => {
                error!(error = %e, "load failed");
                writeln!(out, "Load failed: {e}")
            }
        }
    }

    fn try_load(&mut self) -> ArchiveResult<()> {
        archive::load_from_path(&mut self.users, &self.users_path)?;
        archive::load_from_path(&mut self.resources, &self.resources_path)?;
        Ok(())
    }
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Menu ===")?;
    writeln!(out, "1. List users")?;
    writeln!(out, "2. List resources")?;
    writeln!(out, "3. Check access for a user")?;
    writeln!(out, "4. Save")?;
    writeln!(out, "5. Load")?;
    writeln!(out, "0. Exit")?;
    write!(out, "Select: ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(app: &mut App, script: &str) -> String {
        let mut out = Vec::new();
        app.run(Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn seeded_app() -> App {
        let mut app = App::new("users.csv", "resources.csv");
        app.seed().unwrap();
        app
    }

    #[test]
    fn test_seed_populates_sample_data() {
        let app = seeded_app();
        assert_eq!(app.users().len(), 3);
        assert_eq!(app.resources().len(), 3);
    }

    #[test]
    fn test_listing_users() {
        let mut app = seeded_app();
        let out = run_script(&mut app, "1\n0\n");
        assert!(out.contains("Student: Alice, ID: 1, group: CS-101, access level: 2"));
        assert!(out.contains("Administrator: Root, ID: 3, access level: 10"));
        assert!(out.contains("Bye."));
    }

    #[test]
    fn test_access_report_lists_every_resource() {
        let mut app = seeded_app();
        let out = run_script(&mut app, "3\nDr. Smith\n0\n");
        assert!(out.contains("Access for Dr. Smith (level 5):"));
        assert!(out.contains("Library -> granted"));
        assert!(out.contains("Laboratory 101 -> granted"));
        assert!(out.contains("Conference Hall -> denied"));
    }

    #[test]
    fn test_access_report_for_unknown_user() {
        let mut app = seeded_app();
        let out = run_script(&mut app, "3\nNobody\n0\n");
        assert!(out.contains("No user named \"Nobody\"."));
    }

    #[test]
    fn test_unrecognized_selection_keeps_looping() {
        let mut app = seeded_app();
        let out = run_script(&mut app, "9\n0\n");
        assert!(out.contains("Unrecognized selection: \"9\""));
        assert!(out.contains("Bye."));
    }

    #[test]
    fn test_end_of_input_ends_loop() {
        let mut app = seeded_app();
        let out = run_script(&mut app, "");
        assert!(out.contains("=== Menu ==="));
    }

    #[test]
    fn test_failed_load_is_reported_and_loop_continues() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = App::new(
            tmp.path().join("absent-users.csv"),
            tmp.path().join("absent-resources.csv"),
        );
        app.seed().unwrap();
        let out = run_script(&mut app, "5\n0\n");
        assert!(out.contains("Load failed:"));
        assert!(out.contains("Bye."));
    }
}
