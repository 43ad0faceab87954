#![allow(dead_code)]

use portal_core::{
    ApplicationStatus, CandidateApplication, CandidateId, EmploymentType, FormOptions, JobId,
    JobPosting,
};

pub fn posting(id: &str, title: &str, department: &str, skills: &[&str]) -> JobPosting {
    JobPosting {
        id: JobId::from(id),
        title: title.to_string(),
        department: department.to_string(),
        location: "Pune, India".to_string(),
        experience: "3-5 years".to_string(),
        salary: "₹8-12 LPA".to_string(),
        posted_date: "2 days ago".to_string(),
        applicants: 10,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        employment_type: EmploymentType::FullTime,
        description: None,
        designation: None,
        languages: Vec::new(),
    }
}

pub fn candidate(
    id: &str,
    name: &str,
    employee_id: &str,
    department: &str,
    applied_for: &str,
    skills: &[&str],
    status: ApplicationStatus,
) -> CandidateApplication {
    CandidateApplication {
        id: CandidateId(id.to_string()),
        name: name.to_string(),
        employee_id: employee_id.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "+91 9876543210".to_string(),
        current_role: "Engineer".to_string(),
        current_department: department.to_string(),
        experience: "3 years".to_string(),
        location: "Pune, India".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        applied_for: applied_for.to_string(),
        application_date: "2024-01-16".to_string(),
        status,
    }
}

pub fn listing() -> Vec<JobPosting> {
    vec![
        posting(
            "1",
            "Senior Software Developer",
            "Technology",
            &["Java", "Spring Boot", "React", "AWS", "Microservices"],
        ),
        posting(
            "2",
            "Product Manager",
            "Product Management",
            &["Product Strategy", "Agile", "Analytics", "User Research"],
        ),
        posting(
            "3",
            "DevOps Engineer",
            "Technology",
            &["Docker", "Kubernetes", "Jenkins", "Terraform", "AWS"],
        ),
        posting(
            "4",
            "UI/UX Designer",
            "Design",
            &["Figma", "Adobe XD", "Prototyping", "User Testing"],
        ),
    ]
}

pub fn options() -> FormOptions {
    let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    FormOptions {
        skills: list(&["Java", "Python", "React", "AWS", "Docker", "Figma"]),
        languages: list(&["English", "Hindi", "Tamil"]),
        locations: list(&["Pune, India", "Bangalore, India"]),
        designations: list(&["Software Developer", "Product Manager"]),
        departments: list(&["Technology", "Design"]),
    }
}
