#![allow(clippy::unwrap_used)]

use crate::project::{ArtifactKind, Project, StaticManifest};
use crate::solution::Solution;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// `<tmp>/sln/{App,Tests}` with one source file each.
fn two_project_solution() -> (TempDir, Solution) {
    let temp = TempDir::new().unwrap();
    let sln = temp.path().join("sln");
    fs::create_dir_all(sln.join("App")).unwrap();
    fs::create_dir_all(sln.join("Tests")).unwrap();
    fs::write(sln.join("App/Program.cs"), "").unwrap();
    fs::write(sln.join("Tests/Foo.cs"), "").unwrap();

    let app = Project::builder("App", sln.join("App"))
        .descriptor(
            sln.join("App/App.csproj"),
            Arc::new(StaticManifest::new(["Program.cs"])),
        )
        .artifact_kind(ArtifactKind::Executable)
        .build()
        .unwrap();
    let tests = Project::builder("Tests", sln.join("Tests"))
        .assembly_name("App.Tests")
        .artifact_kind(ArtifactKind::Library)
        .test_project(true)
        .build()
        .unwrap();

    let solution = Solution::new(sln.join("Demo.sln"), vec![app, tests]);
    (temp, solution)
}

#[test]
fn test_solution_root_directory_and_default_name() {
    let (temp, solution) = two_project_solution();
    assert_eq!(solution.root_directory(), temp.path().join("sln"));
    assert_eq!(solution.name(), "Demo");
    assert_eq!(solution.projects().len(), 2);
}

#[test]
fn test_with_name_overrides_default() {
    let solution = Solution::new("/nowhere/Demo.sln", Vec::new()).with_name("Renamed");
    assert_eq!(solution.name(), "Renamed");
    assert_eq!(solution.root_directory(), Path::new("/nowhere"));
}

#[test]
fn test_project_for_file() {
    let (temp, solution) = two_project_solution();
    let sln = temp.path().join("sln");

    assert_eq!(
        solution.project_for_file(sln.join("Tests/Foo.cs")).unwrap().name(),
        "Tests"
    );
    assert_eq!(
        solution.project_for_file(sln.join("App/Program.cs")).unwrap().name(),
        "App"
    );
    assert!(solution.project_for_file(sln.join("App/Missing.cs")).is_none());
}

#[test]
fn test_project_for_file_first_match_wins() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Shared.cs"), "").unwrap();

    let first = Project::builder("First", temp.path()).build().unwrap();
    let second = Project::builder("Second", temp.path()).build().unwrap();
    let solution = Solution::new(temp.path().join("X.sln"), vec![first, second]);

    assert_eq!(
        solution
            .project_for_file(temp.path().join("Shared.cs"))
            .unwrap()
            .name(),
        "First"
    );
}

#[test]
fn test_project_by_location_ignores_index() {
    let (temp, solution) = two_project_solution();
    let sln = temp.path().join("sln");
    fs::write(sln.join("App/NotListed.txt"), "").unwrap();

    assert!(solution.project_for_file(sln.join("App/NotListed.txt")).is_none());
    assert_eq!(
        solution
            .project_by_location(sln.join("App/NotListed.txt"))
            .unwrap()
            .name(),
        "App"
    );
}

#[test]
fn test_project_by_location_unresolvable_file() {
    let (temp, solution) = two_project_solution();
    assert!(
        solution
            .project_by_location(temp.path().join("sln/App/ghost.cs"))
            .is_none()
    );
}

#[test]
fn test_project_by_assembly_name_case_insensitive() {
    let (_temp, solution) = two_project_solution();
    assert_eq!(
        solution.project_by_assembly_name("app.tests").unwrap().name(),
        "Tests"
    );
    assert_eq!(solution.project_by_assembly_name("APP").unwrap().name(), "App");
    assert!(solution.project_by_assembly_name("Other").is_none());
}

#[test]
fn test_test_projects() {
    let (_temp, solution) = two_project_solution();
    let names: Vec<_> = solution.test_projects().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Tests"]);
}

#[test]
fn test_display() {
    let solution = Solution::new("/work/Demo.sln", Vec::new());
    assert_eq!(solution.to_string(), "Solution(path=/work/Demo.sln)");
}
