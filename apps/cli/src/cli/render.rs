//! Terminal rendering for session and chat state.
//!
//! Pure output: every function prints and returns nothing. Color choices
//! track the match-tier palette of the product (excellent green, good
//! yellow, fair blue, low plain).

use owo_colors::OwoColorize;

use crate::chat::{ChatMessage, ChatRole};
use crate::filters::{dimension_options, FilterDimension};
use crate::jobs::format::{compact_salary, format_job_date, MatchTier};
use crate::jobs::NormalizedJob;
use crate::models::course::CourseRecommendation;
use crate::models::profile::CvProfile;
use crate::recommend::{is_skill_matched, skill_boost};
use crate::session::{Banner, SessionState};

/// Offered when a search comes back empty.
const ALTERNATIVE_SKILLS: [&str; 6] = [
    "Data Analysis",
    "Python",
    "SQL",
    "Machine Learning",
    "React",
    "JavaScript",
];

pub fn print_welcome() {
    println!("{}", "Skill-based job search".bold());
    println!("Add skills, search, then filter the results. Type `help` for commands.");
}

pub fn print_help() {
    println!("{}", "Commands".bold());
    println!("  skill add <name>            add a skill to the search set");
    println!("  skill rm <name>             remove a skill");
    println!("  skills                      list the current skills");
    println!("  search                      fetch jobs for the current skills");
    println!("  jobs                        list filtered and sorted results");
    println!("  job <n>                     full card for the nth listed job");
    println!("  filters                     facet values with counts");
    println!("  filter <dimension> <value>  toggle a filter value");
    println!("  unfilter <dimension> <value>  drop a filter value");
    println!("  only <dimension> <value>    keep just this value selected");
    println!("  clear [dimension]           clear one dimension, or all");
    println!("  sort <match|salary|experience> [asc|desc]");
    println!("  courses                     course recommendations");
    println!("  suggest <prefix>            skill suggestions (2+ characters)");
    println!("  upload <path>               upload a CV and match jobs");
    println!("  chat <message>              talk to the assistant");
    println!("  help, quit");
    println!();
    println!(
        "Dimensions: {}",
        FilterDimension::ALL.map(|d| d.key()).join(", ")
    );
}

pub fn print_skills(skills: &[String]) {
    if skills.is_empty() {
        println!("No skills yet. Start with `skill add <name>`.");
    } else {
        println!("Skills: {}", skills.join(", ").cyan());
    }
}

pub fn print_banner(banner: Option<&Banner>) {
    match banner {
        Some(Banner::Error(message)) => println!("{}", message.red()),
        Some(Banner::Demo(message)) => println!("{}", message.yellow()),
        None => {}
    }
}

pub fn print_job_list(state: &SessionState) {
    if !state.has_searched {
        println!("No results yet. Add skills and run `search`.");
        return;
    }

    print_banner(state.banner.as_ref());

    if state.jobs.is_empty() {
        print_no_jobs(state);
        return;
    }

    print_filter_chips(state);

    let visible = state.visible_jobs();
    if visible.is_empty() {
        println!("No jobs match the active filters. `clear` removes them.");
        return;
    }

    println!(
        "{} (sorted by {} {})",
        format!("Showing {} of {} job(s)", visible.len(), state.jobs.len()).bold(),
        state.sort.key.as_str(),
        state.sort.direction.as_str()
    );
    for (index, job) in visible.iter().enumerate() {
        print_job_line(index + 1, job);
    }
}

fn print_no_jobs(state: &SessionState) {
    println!("{}", "No Jobs Found".bold());
    println!(
        "We couldn't find any jobs matching \"{}\". Try adjusting your search terms or explore different skills.",
        state.skills.join(", ")
    );
    println!("Try searching for: {}", ALTERNATIVE_SKILLS.join(", ").cyan());
}

fn print_filter_chips(state: &SessionState) {
    if !state.filters.has_any() {
        return;
    }
    let chips: Vec<String> = state
        .filters
        .iter()
        .map(|(dimension, value)| format!("[{}: {}]", dimension.label(), value))
        .collect();
    println!("Active filters: {}", chips.join(" ").yellow());
}

fn print_job_line(position: usize, job: &NormalizedJob) {
    println!(
        "{:>3}. {}  {}",
        position,
        job.record.title.bold(),
        match_badge(job.record.match_percentage)
    );
    println!(
        "     {} | {} | {} | {} | {}",
        job.record.organization_name,
        location_text(job),
        job.salary_text,
        job.experience_text,
        format_job_date(job.record.date.as_deref())
    );
}

pub fn print_job_detail(position: usize, job: &NormalizedJob, user_skills: &[String]) {
    println!(
        "{} {}",
        format!("Job {position}: {}", job.record.title).bold(),
        match_badge(job.record.match_percentage)
    );
    println!("Organization:  {}", job.record.organization_name);
    println!("Location:      {}", location_text(job));
    println!("Salary:        {}", job.salary_text);
    println!("Experience:    {}", job.experience_text);
    println!("Gender:        {}", job.gender_text);
    detail_line("Sector", &job.record.sectorname);
    detail_line("Industry", &job.record.industryname);
    detail_line("Role", &job.record.functionalrolename);
    detail_line("Qualification", &job.record.highestqualification);
    if let Some(openings) = job.record.numberofopenings {
        println!("Openings:      {openings}");
    }
    println!("Posted:        {}", format_job_date(job.record.date.as_deref()));

    if !job.skills_array.is_empty() {
        let badges: Vec<String> = job
            .skills_array
            .iter()
            .map(|skill| skill_badge(skill, user_skills, &job.record.skills_matched))
            .collect();
        println!("Skills:        {}", badges.join("  "));
    }
    if !job.record.description.is_empty() {
        println!("{}", "Description".bold());
        println!("{}", job.record.description);
    }
}

fn detail_line(label: &str, value: &str) {
    if !value.trim().is_empty() {
        println!("{:<14} {}", format!("{label}:"), value);
    }
}

fn location_text(job: &NormalizedJob) -> String {
    FilterDimension::Location
        .values_of(job)
        .into_iter()
        .next()
        .unwrap_or_default()
}

fn match_badge(score: f64) -> String {
    let badge = format!("[{score:.0}% match]");
    match MatchTier::for_score(score) {
        MatchTier::Excellent => badge.green().to_string(),
        MatchTier::Good => badge.yellow().to_string(),
        MatchTier::Fair => badge.blue().to_string(),
        MatchTier::Low => badge,
    }
}

fn skill_badge(skill: &str, user_skills: &[String], skills_matched: &[String]) -> String {
    if is_skill_matched(skill, user_skills, skills_matched) {
        format!("✓ {skill}").green().to_string()
    } else {
        skill.to_string()
    }
}

pub fn print_facets(state: &SessionState) {
    if state.jobs.is_empty() {
        println!("No jobs to filter. Run `search` first.");
        return;
    }

    print_filter_chips(state);
    for dimension in FilterDimension::ALL {
        let options = dimension_options(&state.jobs, dimension);
        println!("{} ({})", dimension.label().bold(), dimension.key());
        for option in options {
            let marker = if state.filters.is_selected(dimension, &option.value) {
                "[x]".green().to_string()
            } else {
                "[ ]".to_string()
            };
            println!("  {marker} {} ({})", option.label, option.count);
        }
    }
}

pub fn print_courses(state: &SessionState) {
    if state.recommendations.is_empty() {
        println!("No course recommendations yet. They load after a `search` with a skill gap.");
        return;
    }

    print_banner(state.banner.as_ref());
    if state.covered_skills.is_empty() {
        println!("{}", "Recommended courses".bold());
    } else {
        println!(
            "{} (covering: {})",
            "Recommended courses".bold(),
            state.covered_skills.join(", ").cyan()
        );
    }
    for course in &state.recommendations {
        print_course(course);
    }
}

fn print_course(course: &CourseRecommendation) {
    let boost = format!("+{}% match", skill_boost(&course.skill_covered));
    println!("- {}  {}", course.course_name.bold(), boost.green());
    println!(
        "    {} | {} | {} | {}",
        course.platform, course.duration, course.difficulty_level, course.rating
    );
    if !course.educator.is_empty() {
        println!("    by {}", course.educator);
    }
    if !course.link.is_empty() {
        println!("    {}", course.link.cyan());
    }
}

pub fn print_suggestions(suggestions: &[String]) {
    if suggestions.is_empty() {
        println!("No suggestions.");
    } else {
        for suggestion in suggestions {
            println!("  {suggestion}");
        }
    }
}

pub fn print_profile(profile: &CvProfile) {
    println!("{}", "CV profile".bold());
    if let Some(name) = &profile.name {
        println!("Name:       {name}");
    }
    if let Some(email) = &profile.email {
        println!("Email:      {email}");
    }
    if let Some(phone) = &profile.phone {
        println!("Phone:      {phone}");
    }
    if let Some(location) = &profile.location {
        println!("Location:   {location}");
    }
    if !profile.skills.is_empty() {
        println!("Skills:     {}", profile.skills.join(", ").cyan());
    }
    if !profile.certifications.is_empty() {
        println!("Certs:      {}", profile.certifications.join(", "));
    }
    let experience_entries = profile
        .experience_count
        .unwrap_or(profile.experience.len() as u32);
    if experience_entries > 0 {
        println!("Experience: {experience_entries} role(s)");
    }
    if let Some(score) = profile.confidence_score {
        println!("Extraction confidence: {score}");
    }
}

pub fn print_chat_messages(messages: &[ChatMessage]) {
    for message in messages {
        let prefix = match message.role {
            ChatRole::User => "you".cyan().to_string(),
            ChatRole::Bot => "assistant".green().to_string(),
        };
        println!("{prefix}: {}", message.content);

        for (index, job) in message.jobs.iter().enumerate() {
            println!(
                "    {}. {} | {} | {} | {:.0}% match",
                index + 1,
                job.title,
                job.organization_name,
                compact_salary(job.avewage),
                job.match_percentage
            );
        }
        if !message.suggestions.is_empty() {
            println!("    try: {}", message.suggestions.join(" | ").yellow());
        }
    }
}
