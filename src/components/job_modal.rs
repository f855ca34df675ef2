//! Detail dialog shared by curated cards and search results.

#[cfg(test)]
#[path = "job_modal_test.rs"]
mod job_modal_test;

use leptos::prelude::*;

use crate::net::types::{CuratedJob, JobListing};

/// Display projection common to both listing shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobDetail {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub salary: Option<String>,
    pub link: Option<String>,
}

impl From<&JobListing> for JobDetail {
    fn from(job: &JobListing) -> Self {
        Self {
            title: job.job_title.clone(),
            company: job.employer_name.clone(),
            location: job.location_line(),
            description: job.job_description.clone(),
            requirements: job.job_requirements.clone(),
            salary: None,
            link: job.link().map(str::to_owned),
        }
    }
}

impl From<&CuratedJob> for JobDetail {
    fn from(job: &CuratedJob) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: format!("{} | {}", job.location, job.employment_type),
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            salary: Some(job.salary.clone()),
            link: Some(job.apply_link.clone()).filter(|l| !l.is_empty()),
        }
    }
}

#[component]
pub fn JobModal(detail: JobDetail, on_close: Callback<()>) -> impl IntoView {
    let JobDetail { title, company, location, description, requirements, salary, link } = detail;

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--job" on:click=move |ev| ev.stop_propagation()>
                <button class="dialog__close" on:click=move |_| on_close.run(()) title="Close">
                    "×"
                </button>
                <h2>{title}</h2>
                <p class="dialog__company">{company}</p>
                <p class="dialog__location">{location}</p>
                {description
                    .map(|text| {
                        view! {
                            <div class="dialog__section">
                                <h3>"Description:"</h3>
                                <p class="dialog__prewrap">{text}</p>
                            </div>
                        }
                    })}
                {requirements
                    .map(|text| {
                        view! {
                            <div class="dialog__section">
                                <h3>"Requirements:"</h3>
                                <p class="dialog__prewrap">{text}</p>
                            </div>
                        }
                    })}
                {salary.map(|salary| view! { <p class="dialog__salary">"Salary: " {salary}</p> })}
                {link
                    .map(|href| {
                        view! {
                            <a class="btn btn--primary" href=href target="_blank" rel="noopener noreferrer">
                                "Apply Now"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
