//! Table rendering for entity listings.
//!
//! Display strings (status labels, plan types, relations) are the canonical
//! Persian labels from the domain layer.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use client::documents::DocumentList;
use client::statistics::{OverviewStats, PersonStats, PlanStats, RegistrationStats};
use domain::{
    Coverage, Document, DocumentWithUser, LocationNode, Person, Plan, Registration, School, User,
};

fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.to_vec());
    table
}

fn date_or_dash(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn print_plans(plans: &[Plan]) {
    let mut t = table(&["ID", "Name", "Type", "Monthly premium", "Coverages", "Active"]);
    for plan in plans {
        t.add_row(vec![
            plan.id.to_string(),
            plan.name_fa.clone(),
            plan.plan_type.label_fa().to_string(),
            format!("{:.0}", plan.monthly_premium),
            plan.coverages.len().to_string(),
            if plan.is_active { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{t}");
}

pub fn print_plan_detail(plan: &Plan) {
    println!(
        "{} ({}) - {:.0} rials/month",
        plan.name_fa,
        plan.plan_type.label_fa(),
        plan.monthly_premium
    );
    println!("{}", plan.description_fa);

    let mut t = table(&["Type", "Title", "Cap", "Percent", "Max uses"]);
    for coverage in &plan.coverages {
        t.add_row(vec![
            coverage.coverage_type.label_fa().to_string(),
            coverage.title_fa.clone(),
            format!("{:.0}", coverage.coverage_amount),
            format!("{}%", coverage.coverage_percentage),
            coverage
                .max_usage_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "unlimited".to_string()),
        ]);
    }
    println!("{t}");
}

pub fn print_coverages(coverages: &[Coverage]) {
    let mut t = table(&["ID", "Plan", "Type", "Title", "Cap", "Percent", "Max uses"]);
    for coverage in coverages {
        t.add_row(vec![
            coverage.id.to_string(),
            coverage
                .plan_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            coverage.coverage_type.label_fa().to_string(),
            coverage.title_fa.clone(),
            format!("{:.0}", coverage.coverage_amount),
            format!("{}%", coverage.coverage_percentage),
            coverage
                .max_usage_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "unlimited".to_string()),
        ]);
    }
    println!("{t}");
}

pub fn print_registrations(registrations: &[Registration]) {
    let mut t = table(&["ID", "Status", "Registered", "Start", "End"]);
    for registration in registrations {
        t.add_row(vec![
            registration.id.to_string(),
            registration.status.label_fa().to_string(),
            registration.registration_date.clone(),
            date_or_dash(registration.start_date),
            date_or_dash(registration.end_date),
        ]);
    }
    println!("{t}");
}

/// Detail view with the status description shown to the end user.
pub fn print_registration_detail(registration: &Registration) {
    let mut t = table(&["Field", "Value"]);
    t.add_row(vec!["ID".to_string(), registration.id.to_string()]);
    t.add_row(vec!["Plan".to_string(), registration.plan_id.to_string()]);
    t.add_row(vec!["School".to_string(), registration.school_id.to_string()]);
    t.add_row(vec![
        "Status".to_string(),
        registration.status.label_fa().to_string(),
    ]);
    t.add_row(vec![
        "Registered".to_string(),
        registration.registration_date.clone(),
    ]);
    t.add_row(vec![
        "Start".to_string(),
        date_or_dash(registration.start_date),
    ]);
    t.add_row(vec!["End".to_string(), date_or_dash(registration.end_date)]);
    println!("{t}");
    println!("{}", registration.status.description_fa());
}

pub fn print_persons(persons: &[Person]) {
    let mut t = table(&["ID", "Name", "National code", "Birth date", "Relation", "Age"]);
    for person in persons {
        t.add_row(vec![
            person.id.to_string(),
            person.full_name(),
            person.national_code.clone(),
            person.birth_date.to_string(),
            person.relation.label_fa().to_string(),
            person.age.to_string(),
        ]);
    }
    println!("{t}");
}

pub fn print_documents(list: &DocumentList) {
    let mut t = table(&["ID", "Type", "Title", "File", "Size (MB)", "Verified"]);
    for document in &list.documents {
        t.add_row(document_row(document));
    }
    println!("{t}");
    println!("{} document(s)", list.total);
}

pub fn print_documents_with_users(documents: &[DocumentWithUser], total: u64) {
    let mut t = table(&["ID", "Type", "Title", "Owner", "Size (MB)", "Verified"]);
    for item in documents {
        t.add_row(vec![
            item.document.id.to_string(),
            item.document.document_type.label_fa().to_string(),
            item.document.title.clone(),
            item.user_name.clone(),
            format!("{:.2}", item.document.file_size_mb),
            if item.document.is_verified { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{t}");
    println!("{} document(s)", total);
}

fn document_row(document: &Document) -> Vec<String> {
    vec![
        document.id.to_string(),
        document.document_type.label_fa().to_string(),
        document.title.clone(),
        document.file_name.clone(),
        format!("{:.2}", document.file_size_mb),
        if document.is_verified { "yes" } else { "no" }.to_string(),
    ]
}

pub fn print_locations(nodes: &[LocationNode]) {
    let mut t = table(&["ID", "Name", "Code"]);
    for node in nodes {
        t.add_row(vec![
            node.id.to_string(),
            node.name_fa.clone(),
            node.code.clone(),
        ]);
    }
    println!("{t}");
}

pub fn print_schools(schools: &[School]) {
    let mut t = table(&["ID", "Name", "Code", "Type", "Phone"]);
    for school in schools {
        t.add_row(vec![
            school.id.to_string(),
            school.name_fa.clone(),
            school.code.clone(),
            school.school_type.label_fa().to_string(),
            school.phone.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{t}");
}

pub fn print_users(users: &[User]) {
    let mut t = table(&["ID", "National id", "Name", "Email", "Admin", "Active"]);
    for user in users {
        t.add_row(vec![
            user.id.to_string(),
            user.national_id.clone(),
            user.full_name(),
            user.email.clone().unwrap_or_else(|| "-".to_string()),
            if user.is_admin { "yes" } else { "no" }.to_string(),
            if user.is_active { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{t}");
}

pub fn print_overview(stats: &OverviewStats) {
    let mut t = table(&["Metric", "Count"]);
    t.add_row(vec!["Users".to_string(), stats.total_users.to_string()]);
    t.add_row(vec!["Admins".to_string(), stats.total_admins.to_string()]);
    t.add_row(vec![
        "Regular users".to_string(),
        stats.total_regular_users.to_string(),
    ]);
    t.add_row(vec!["Dependents".to_string(), stats.total_persons.to_string()]);
    t.add_row(vec![
        "Registrations".to_string(),
        stats.total_registrations.to_string(),
    ]);
    t.add_row(vec!["Schools".to_string(), stats.total_schools.to_string()]);
    t.add_row(vec!["Plans".to_string(), stats.total_plans.to_string()]);
    t.add_row(vec![
        "Active registrations".to_string(),
        stats.active_registrations.to_string(),
    ]);
    t.add_row(vec![
        "Pending registrations".to_string(),
        stats.pending_registrations.to_string(),
    ]);
    println!("{t}");
}

pub fn print_registration_stats(stats: &RegistrationStats) {
    let mut t = table(&["Status", "Count"]);
    t.add_row(vec!["pending".to_string(), stats.pending.to_string()]);
    t.add_row(vec!["approved".to_string(), stats.approved.to_string()]);
    t.add_row(vec!["rejected".to_string(), stats.rejected.to_string()]);
    t.add_row(vec!["active".to_string(), stats.active.to_string()]);
    t.add_row(vec!["expired".to_string(), stats.expired.to_string()]);
    t.add_row(vec!["total".to_string(), stats.total.to_string()]);
    println!("{t}");
    println!("{} in the last 30 days", stats.recent_registrations);
}

pub fn print_person_stats(stats: &PersonStats) {
    let mut t = table(&["Relation", "Count"]);
    for (relation, count) in &stats.by_relation {
        t.add_row(vec![relation.clone(), count.to_string()]);
    }
    println!("{t}");
    println!(
        "{} dependents, {:.2} per user on average",
        stats.total, stats.average_per_user
    );
}

pub fn print_plan_stats(stats: &PlanStats) {
    let mut t = table(&["Type", "Count"]);
    for (plan_type, count) in &stats.by_type {
        t.add_row(vec![plan_type.clone(), count.to_string()]);
    }
    println!("{t}");
    println!(
        "{} plans ({} active, {} inactive), average premium {:.0}",
        stats.total, stats.active, stats.inactive, stats.average_premium
    );
}
