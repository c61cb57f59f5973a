//! Markdown project report

use std::fmt::Write;

use labsite_domain::Project;

/// Shown when a project has no image files
const NO_IMAGES: &str = "none found";

/// One section per project: title and id, funding, description, team ids,
/// the publication count, and the image files `images` lists for it.
pub fn project_report<F>(projects: &[Project], mut images: F) -> String
where
    F: FnMut(&Project) -> Vec<String>,
{
    let mut out = String::from("# Project Report\n");

    for project in projects {
        // Writing to a String cannot fail
        let _ = writeln!(out, "\n## {} (/{})\n", project.title, project.id);
        if let Some(funding) = &project.funding {
            let _ = writeln!(
                out,
                "**Funding**: {} {} ({})\n",
                funding.agency, funding.amount, funding.duration
            );
        }
        let _ = writeln!(out, "**Status**: {}\n", project.status.as_str());
        let _ = writeln!(out, "{}\n", project.description.trim());

        let team = if project.team.is_empty() {
            "none listed".to_string()
        } else {
            project.team.join(", ")
        };
        let _ = writeln!(out, "**Team**: {}\n", team);
        let _ = writeln!(out, "**Publications**: {}\n", project.publications);

        let files = images(project);
        let files = if files.is_empty() {
            NO_IMAGES.to_string()
        } else {
            files.join(", ")
        };
        let _ = writeln!(out, "**Images found**: {}", files);
    }

    out
}
