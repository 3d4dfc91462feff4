//! Seed dataset used when no persisted state exists.

use crate::models::{Asset, AssetType, Comment, Project, ProjectStatus, TeamMember};

fn member(id: &str, name: &str, email: &str, role: &str, join_date: &str, avatar: &str) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        avatar: Some(avatar.to_string()),
        join_date: join_date.to_string(),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Corporate Gala 2024".to_string(),
            description: "Elegant corporate event with modern staging".to_string(),
            thumbnail: "https://images.pexels.com/photos/1190298/pexels-photo-1190298.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&dpr=2".to_string(),
            status: ProjectStatus::InProgress,
            team: vec![
                member(
                    "tm1",
                    "Alex Johnson",
                    "alex@example.com",
                    "Project Manager",
                    "2024-01-15",
                    "https://randomuser.me/api/portraits/men/1.jpg",
                ),
                member(
                    "tm2",
                    "Sarah Williams",
                    "sarah@example.com",
                    "Designer",
                    "2024-01-16",
                    "https://randomuser.me/api/portraits/women/1.jpg",
                ),
                member(
                    "tm3",
                    "Michael Chen",
                    "michael@example.com",
                    "Developer",
                    "2024-01-17",
                    "https://randomuser.me/api/portraits/men/2.jpg",
                ),
            ],
            created_at: "2024-01-15".to_string(),
            updated_at: "2024-01-20".to_string(),
        },
        Project {
            id: "2".to_string(),
            title: "Wedding Reception".to_string(),
            description: "Romantic outdoor wedding setup".to_string(),
            thumbnail: "https://images.pexels.com/photos/1444442/pexels-photo-1444442.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&dpr=2".to_string(),
            status: ProjectStatus::Completed,
            team: vec![member(
                "tm4",
                "Emma Wilson",
                "emma@example.com",
                "Event Planner",
                "2024-02-10",
                "https://randomuser.me/api/portraits/women/2.jpg",
            )],
            created_at: "2024-02-01".to_string(),
            updated_at: "2024-02-15".to_string(),
        },
        Project {
            id: "3".to_string(),
            title: "Tech Conference".to_string(),
            description: "Modern tech conference with interactive displays".to_string(),
            thumbnail: "https://images.pexels.com/photos/2774556/pexels-photo-2774556.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&dpr=2".to_string(),
            status: ProjectStatus::Draft,
            team: vec![member(
                "tm5",
                "David Rodriguez",
                "david@example.com",
                "Tech Lead",
                "2024-03-01",
                "https://randomuser.me/api/portraits/men/3.jpg",
            )],
            created_at: "2024-03-01".to_string(),
            updated_at: "2024-03-05".to_string(),
        },
    ]
}

pub fn assets() -> Vec<Asset> {
    let asset = |id: &str, name: &str, asset_type, url: &str, size: &str| Asset {
        id: id.to_string(),
        name: name.to_string(),
        asset_type,
        url: url.to_string(),
        size: size.to_string(),
        project_id: None,
    };

    vec![
        asset("1", "Modern Chair", AssetType::Model, "/assets/chair.glb", "2.4 MB"),
        asset("2", "Wood Texture", AssetType::Texture, "/assets/wood.jpg", "1.2 MB"),
        asset("3", "Stage Lighting", AssetType::Model, "/assets/light.glb", "800 KB"),
    ]
}

pub fn comments() -> Vec<Comment> {
    vec![
        Comment {
            id: "1".to_string(),
            author: "Sarah Johnson".to_string(),
            content: "Love the lighting setup! Could we make the stage area a bit larger?"
                .to_string(),
            timestamp: "2024-01-20T10:30:00Z".to_string(),
            avatar: Some("https://randomuser.me/api/portraits/women/4.jpg".to_string()),
            project_id: None,
        },
        Comment {
            id: "2".to_string(),
            author: "Mike Chen".to_string(),
            content: "The color scheme works perfectly with our brand guidelines.".to_string(),
            timestamp: "2024-01-20T14:15:00Z".to_string(),
            avatar: Some("https://randomuser.me/api/portraits/men/4.jpg".to_string()),
            project_id: None,
        },
    ]
}
