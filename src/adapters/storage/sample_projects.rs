//! Sample project records for demos and local development.
//!
//! Written in the store's own snake_case spelling so they exercise the same
//! ingestion path as real data.

use serde_json::{json, Value};

/// Projects a provider was hired for.
pub fn sample_provider_projects() -> Vec<Value> {
    vec![
        json!({
            "id": "1",
            "title": "Brand Identity Design",
            "description": "Complete brand identity package including logo, colors, and guidelines",
            "status": "in_progress",
            "budget_amount": 2_500_000,
            "created_at": "2025-01-15",
            "due_date": "2025-02-15",
            "client": {
                "full_name": "John Doe",
                "profile_image": "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150"
            },
            "milestones": [
                { "title": "Initial concepts", "status": "completed", "due_date": "2025-01-20" },
                { "title": "Revisions", "status": "in_progress", "due_date": "2025-02-01" },
                { "title": "Final delivery", "status": "pending", "due_date": "2025-02-15" }
            ]
        }),
        json!({
            "id": "2",
            "title": "Product Photography Session",
            "description": "Professional photography for e-commerce catalog",
            "status": "in_progress",
            "budget_amount": 1_200_000,
            "created_at": "2025-01-22",
            "due_date": "2025-02-05",
            "client": { "full_name": "Sarah Smith" },
            "milestones": [
                { "title": "Studio setup", "status": "completed", "due_date": "2025-01-25" },
                { "title": "Photo shoot", "status": "in_progress", "due_date": "2025-01-30" }
            ]
        }),
        json!({
            "id": "3",
            "title": "Social Media Content Package",
            "description": "30 days of social media content creation",
            "status": "completed",
            "budget_amount": 850_000,
            "created_at": "2024-12-15",
            "due_date": "2025-01-15",
            "client": { "full_name": "Mike Johnson" }
        }),
    ]
}

/// Projects a client commissioned.
pub fn sample_client_projects() -> Vec<Value> {
    vec![
        json!({
            "id": "1",
            "title": "Brand Identity Design",
            "description": "Complete brand identity package including logo, colors, and guidelines",
            "status": "in_progress",
            "budget_amount": 2_500_000,
            "created_at": "2025-01-15",
            "due_date": "2025-02-15",
            "progress": 65,
            "provider": {
                "full_name": "Emma Wilson",
                "profile_image": "https://images.pexels.com/photos/31422830/pexels-photo-31422830.png?auto=compress&cs=tinysrgb&w=150"
            }
        }),
        json!({
            "id": "2",
            "title": "Social Media Campaign",
            "description": "Three-month social media marketing campaign",
            "status": "in_progress",
            "budget_amount": 1_800_000,
            "created_at": "2025-01-20",
            "due_date": "2025-04-20",
            "progress": 35,
            "provider": {
                "full_name": "Ruby Nesda",
                "profile_image": "https://images.pexels.com/photos/6311651/pexels-photo-6311651.jpeg?auto=compress&cs=tinysrgb&w=150"
            }
        }),
        json!({
            "id": "3",
            "title": "Product Photography",
            "description": "Professional photography for product catalog",
            "status": "completed",
            "budget_amount": 950_000,
            "created_at": "2024-12-10",
            "due_date": "2024-12-28",
            "progress": 100,
            "provider": { "full_name": "Maya Chen" }
        }),
    ]
}
