use super::*;

#[test]
fn letter_columns_follow_board_layout() {
    let enter = letters_column(0).unwrap();
    assert_eq!(enter.position(0), Vec2::new(45.0, 45.0));
    let exit = letters_column(2).unwrap();
    let third = 800.0 / 3.0;
    let p = exit.position(5);
    assert!((p.x - (45.0 + 2.0 * third + (third - 35.0) / 4.0)).abs() < 1e-9);
    assert!((p.y - (45.0 + 445.0 / 10.0)).abs() < 1e-9);
}

#[test]
fn linear_lines_map_extent_onto_both_bars() {
    let lines = scale_lines(ScaleSet::Linear).unwrap();
    assert_eq!(lines.len(), 20);
    assert_eq!(lines[0].y1, 135.0);
    assert_eq!(lines[0].y2, 70.0);
    assert_eq!(lines[19].y1, 515.0);
    assert_eq!(lines[19].y2, 580.0);
}

#[test]
fn logarithmic_lines_bunch_toward_the_top_of_the_range() {
    let lines = scale_lines(ScaleSet::Logarithmic).unwrap();
    assert_eq!(lines.len(), 63);
    assert_eq!(lines[0].y2, 200.0);
    assert!((lines[62].y2 - 515.0).abs() < 1e-9);
    let middle = lines[31].y2;
    assert!(middle > (200.0 + 515.0) / 2.0);
}

#[test]
fn point_lines_cover_the_alphabet() {
    let lines = scale_lines(ScaleSet::Point).unwrap();
    assert_eq!(lines.len(), 26);
    let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
    assert!(close(lines[0].y1, 70.0));
    assert!(close(lines[25].y1, 450.0));
    assert!(close(lines[0].y2, 135.0));
    assert!(close(lines[25].y2, 385.0));
}

#[test]
fn scales_config_staggers_enter_and_update_only() {
    let cfg = scales_config();
    assert!(cfg.enter.stagger && cfg.update.stagger);
    assert!(!cfg.exit.stagger);
    assert_eq!(cfg.exit.duration_ms, 250);
}

fn repo(name: &str, commits: u32) -> Repo {
    Repo {
        name: name.to_owned(),
        commits,
    }
}

#[test]
fn chart_bars_rank_repositories_by_commits() {
    let bars = chart_bars(&[repo("small", 10), repo("big", 40), repo("mid", 20)]);
    let names: Vec<_> = bars.iter().map(|b| b.repo.as_str()).collect();
    assert_eq!(names, vec!["big", "mid", "small"]);

    assert_eq!(bars[0].y, 5.0);
    assert_eq!(bars[0].height, 445.0);
    assert!((bars[1].height - 222.5).abs() < 1e-9);
    assert!(bars.windows(2).all(|w| w[0].x < w[1].x));
    assert!(bars.iter().all(|b| b.x > 50.0 && b.x + b.width < 795.0));
    assert!(bars.iter().all(|b| b.width == bars[0].width));
}

#[test]
fn chart_keeps_only_the_busiest_repositories() {
    let repos: Vec<Repo> = (0..80u32).map(|i| repo(&format!("r{i}"), i)).collect();
    let bars = chart_bars(&repos);
    assert_eq!(bars.len(), TOP_REPOS);
    assert_eq!(bars[0].repo, "r79");
    assert_eq!(bars[49].repo, "r30");
    assert_eq!(
        bars.iter().map(|b| b.rank).collect::<Vec<_>>(),
        (0..TOP_REPOS).collect::<Vec<_>>()
    );
}
