use crate::animation::ease::Ease;
use crate::animation::value::{AttrValue, Attributes, attributes};
use crate::binding::config::{BindingConfig, TransitionSpec};
use crate::binding::driver::Binder;
use crate::binding::placement::{GridPlacement, Poses};
use crate::demo::rng::Rng64;
use crate::demo::runner::{DemoCycle, Plan, play};
use crate::demo::snapshot::FrameSnapshot;
use crate::foundation::core::{Rgba8, Vec2};
use crate::foundation::error::JoineryResult;
use crate::scale::Scale;
use crate::scale::band::BandScale;
use crate::scale::continuous::{LinearScale, LogScale, extent};
use crate::scale::point::PointScale;

type Played = (Vec<DemoCycle>, Vec<FrameSnapshot>);

// letters

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz0123456789";
const LETTERS_WIDTH: f64 = 800.0;
const LETTERS_HEIGHT: f64 = 500.0;
const LETTERS_MARGIN: f64 = 10.0;
const ICON_SIZE: f64 = 35.0;

pub(crate) fn letters_config() -> BindingConfig {
    BindingConfig::uniform(TransitionSpec::default())
}

/// Column `idx` (enter, update, exit) of the letters board.
pub(crate) fn letters_column(idx: usize) -> JoineryResult<GridPlacement> {
    let third = LETTERS_WIDTH / 3.0;
    GridPlacement::new(
        4,
        10,
        Vec2::new(
            ICON_SIZE + LETTERS_MARGIN + third * idx as f64,
            ICON_SIZE + LETTERS_MARGIN,
        ),
        Vec2::new(
            third - ICON_SIZE,
            LETTERS_HEIGHT - 2.0 * LETTERS_MARGIN - ICON_SIZE,
        ),
    )
}

fn letter_pose(c: char, at: Vec2) -> Attributes {
    let mut pose = attributes([("transform", AttrValue::Point(at)), ("opacity", 1.0.into())]);
    pose.insert("label".to_owned(), AttrValue::Text(c.to_uppercase().collect()));
    pose
}

pub(crate) fn letters(plan: &Plan, config: BindingConfig, rng: &mut Rng64) -> JoineryResult<Played> {
    let enter = letters_column(0)?;
    let update = letters_column(1)?;
    let exit = letters_column(2)?;
    let all: Vec<char> = LETTERS.chars().collect();

    let poses: Poses<'_, char, char> = Poses::new(move |c: &char, slot| letter_pose(*c, enter.at(slot)))
        .update(move |c, slot| letter_pose(*c, update.at(slot)))
        .entry(|_, _| attributes([("transform", Vec2::ZERO)]))
        .exit(move |_, slot| attributes([("transform", exit.at(slot))]))
        .exit_then(|_, _| attributes([("opacity", 0.0)]));

    let mut binder = Binder::new(config);
    play(
        plan,
        &mut binder,
        |_| {
            let mut picked = rng.subset(&all, 50.0);
            rng.shuffle(&mut picked);
            tracing::debug!(data = %picked.iter().collect::<String>(), "letters cycle");
            Ok(picked)
        },
        |c: &char| *c,
        &poses,
    )
}

// grid

const GRID_CELLS: u32 = 200;
const GRID_WIDTH: f64 = 800.0;
const GRID_HEIGHT: f64 = 500.0;
const RECOLOR_PERCENT: f64 = 35.0;

#[derive(Clone, Copy, Debug)]
struct Cell {
    id: u32,
    fill: Rgba8,
}

pub(crate) fn grid_config() -> BindingConfig {
    BindingConfig::uniform(TransitionSpec {
        ease: Ease::InOutCubic,
        ..TransitionSpec::default()
    })
}

fn random_color(rng: &mut Rng64) -> Rgba8 {
    let mut channel = || rng.below(256) as u8;
    Rgba8::rgb(channel(), channel(), channel())
}

pub(crate) fn grid(plan: &Plan, config: BindingConfig, rng: &mut Rng64) -> JoineryResult<Played> {
    let layout = GridPlacement::new(
        20,
        10,
        Vec2::new(ICON_SIZE / 2.0, ICON_SIZE / 2.0),
        Vec2::new(GRID_WIDTH - ICON_SIZE, GRID_HEIGHT - ICON_SIZE),
    )?;
    let poses: Poses<'_, u32, Cell> = Poses::new(move |cell: &Cell, _| {
        let at = layout.position(cell.id as usize);
        attributes([
            ("x", AttrValue::Number(at.x)),
            ("y", AttrValue::Number(at.y)),
            ("width", AttrValue::Number(ICON_SIZE)),
            ("height", AttrValue::Number(ICON_SIZE)),
            ("fill", AttrValue::Color(cell.fill)),
        ])
    });

    let mut cells: Vec<Cell> = (0..GRID_CELLS)
        .map(|id| Cell {
            id,
            fill: Rgba8::BLACK,
        })
        .collect();

    let mut binder = Binder::new(config);
    play(
        plan,
        &mut binder,
        |cycle| {
            // the first cycle only creates cells
            if cycle > 0 {
                let color = random_color(rng);
                let mut recolored = 0usize;
                for cell in cells.iter_mut() {
                    if rng.chance(RECOLOR_PERCENT) {
                        cell.fill = color;
                        recolored += 1;
                    }
                }
                tracing::debug!(color = %color.to_css(), recolored, "grid cycle");
            }
            Ok(cells.clone())
        },
        |cell: &Cell| cell.id,
        &poses,
    )
}

// scales

const SCALES_WIDTH: f64 = 1400.0;
const SCALES_HEIGHT: f64 = 650.0;
const H_STEP: f64 = SCALES_HEIGHT / 10.0;
const AREA_X1: f64 = 150.0;
const AREA_Y1: f64 = 5.0;
const AREA_X2: f64 = SCALES_WIDTH - 150.0;
const AREA_Y2: f64 = SCALES_HEIGHT - 5.0;
const BAR_WIDTH: f64 = SCALES_WIDTH / 12.0;

/// Data sets shown by the scales demo, in switching order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScaleSet {
    Linear,
    Logarithmic,
    Point,
}

impl ScaleSet {
    const CYCLE: [Self; 3] = [Self::Linear, Self::Logarithmic, Self::Point];
}

/// One mapping line: domain position on the left bar, range position on the right bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Line {
    pub(crate) index: usize,
    pub(crate) y1: f64,
    pub(crate) y2: f64,
}

pub(crate) fn scales_config() -> BindingConfig {
    let staggered = TransitionSpec {
        stagger: true,
        ..TransitionSpec::default()
    };
    BindingConfig {
        enter: staggered,
        update: staggered,
        exit: TransitionSpec {
            duration_ms: 250,
            ease: Ease::InOutCubic,
            ..TransitionSpec::default()
        },
        exit_then: TransitionSpec::default(),
    }
}

fn mapped_lines<D>(
    data: &[D],
    domain_side: &impl Scale<D>,
    range_side: &impl Scale<D>,
) -> Vec<Line> {
    data.iter()
        .enumerate()
        .map(|(index, d)| Line {
            index,
            y1: domain_side.map(d),
            y2: range_side.map(d),
        })
        .collect()
}

/// Lines for one data set.
pub(crate) fn scale_lines(set: ScaleSet) -> JoineryResult<Vec<Line>> {
    match set {
        ScaleSet::Linear => {
            let data: Vec<f64> = (0..100).step_by(5).map(f64::from).collect();
            let ext = extent(data.iter().copied()).unwrap_or((0.0, 1.0));
            let domain_side =
                LinearScale::new(ext, (AREA_Y1 + 2.0 * H_STEP, AREA_Y2 - 2.0 * H_STEP));
            let range_side = LinearScale::new(ext, (AREA_Y1 + H_STEP, AREA_Y2 - H_STEP));
            Ok(mapped_lines(&data, &domain_side, &range_side))
        }
        ScaleSet::Logarithmic => {
            let data: Vec<f64> = (1..500).step_by(8).map(f64::from).collect();
            let ext = extent(data.iter().copied()).unwrap_or((1.0, 10.0));
            let domain_side = LinearScale::new(ext, (AREA_Y1 + H_STEP, AREA_Y2 - 4.0 * H_STEP));
            let range_side = LogScale::new(ext, (AREA_Y1 + 3.0 * H_STEP, AREA_Y2 - 2.0 * H_STEP))?;
            Ok(mapped_lines(&data, &domain_side, &range_side))
        }
        ScaleSet::Point => {
            let data: Vec<char> = ('a'..='z').collect();
            let domain_side = PointScale::new(
                data.iter().copied(),
                (AREA_Y1 + H_STEP, AREA_Y2 - 3.0 * H_STEP),
            );
            let range_side = PointScale::new(
                data.iter().copied(),
                (AREA_Y1 + 2.0 * H_STEP, AREA_Y2 - 4.0 * H_STEP),
            );
            Ok(mapped_lines(&data, &domain_side, &range_side))
        }
    }
}

pub(crate) fn scales(plan: &Plan, config: BindingConfig) -> JoineryResult<Played> {
    let poses: Poses<'_, usize, Line> = Poses::new(|line: &Line, _| {
        attributes([
            ("x1", AREA_X1 + BAR_WIDTH),
            ("y1", line.y1),
            ("x2", AREA_X2 - BAR_WIDTH),
            ("y2", line.y2),
            ("stroke_opacity", 1.0),
        ])
    })
    .entry(|_, _| attributes([("x1", 0.0), ("y1", 0.0), ("x2", 0.0), ("y2", 0.0)]))
    .exit(|_, _| attributes([("stroke_opacity", 0.0)]));

    let mut binder = Binder::new(config);
    play(
        plan,
        &mut binder,
        |cycle| {
            let set = ScaleSet::CYCLE[cycle % ScaleSet::CYCLE.len()];
            tracing::debug!(set = ?set, "scales cycle");
            scale_lines(set)
        },
        |line: &Line| line.index,
        &poses,
    )
}

// bars

const BARS_WIDTH: f64 = 800.0;
const BARS_HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 50.0;
const MARGIN_TOP: f64 = 5.0;
const MARGIN_RIGHT: f64 = 5.0;
const MARGIN_BOTTOM: f64 = 150.0;
const BASELINE: f64 = BARS_HEIGHT - MARGIN_BOTTOM;
pub(crate) const TOP_REPOS: usize = 50;
const REPO_PREFIXES: [&str; 8] = ["core", "web", "data", "ml", "infra", "docs", "api", "cli"];
const REPO_SUFFIXES: [&str; 8] = ["engine", "tools", "kit", "server", "client", "lab", "sdk", "ui"];

/// Commit count of one repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Repo {
    pub(crate) name: String,
    pub(crate) commits: u32,
}

/// One bar of the commit chart, keyed by rank.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Bar {
    pub(crate) rank: usize,
    pub(crate) repo: String,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

pub(crate) fn bars_config() -> BindingConfig {
    BindingConfig {
        enter: TransitionSpec {
            stagger: true,
            ..TransitionSpec::default()
        },
        ..BindingConfig::default()
    }
}

fn repos(rng: &mut Rng64) -> Vec<Repo> {
    REPO_PREFIXES
        .iter()
        .flat_map(|p| REPO_SUFFIXES.iter().map(move |s| format!("{p}-{s}")))
        .map(|name| Repo {
            name,
            commits: 1 + rng.below(2000) as u32,
        })
        .collect()
}

fn lay_out_bars(
    top: &[&Repo],
    x: &impl Scale<String>,
    width: f64,
    y: &impl Scale<f64>,
) -> Vec<Bar> {
    let baseline = y.map(&0.0);
    top.iter()
        .enumerate()
        .map(|(rank, repo)| {
            let y_top = y.map(&f64::from(repo.commits));
            Bar {
                rank,
                repo: repo.name.clone(),
                x: x.map(&repo.name),
                y: y_top,
                width,
                height: baseline - y_top,
            }
        })
        .collect()
}

/// Bars for the repositories with the most commits, tallest first.
pub(crate) fn chart_bars(repos: &[Repo]) -> Vec<Bar> {
    let mut top: Vec<&Repo> = repos.iter().collect();
    top.sort_by(|a, b| b.commits.cmp(&a.commits));
    top.truncate(TOP_REPOS);

    let x = BandScale::new(
        top.iter().map(|r| r.name.clone()),
        (MARGIN_LEFT, BARS_WIDTH - MARGIN_RIGHT),
    )
    .with_padding(0.1);
    let max = top.iter().map(|r| f64::from(r.commits)).fold(0.0, f64::max);
    let y = LinearScale::new((0.0, max), (BASELINE, MARGIN_TOP));
    lay_out_bars(&top, &x, x.bandwidth(), &y)
}

pub(crate) fn bars(plan: &Plan, config: BindingConfig, rng: &mut Rng64) -> JoineryResult<Played> {
    let poses: Poses<'_, usize, Bar> = Poses::new(|bar: &Bar, _| {
        let mut pose = attributes([
            ("x", bar.x),
            ("y", bar.y),
            ("width", bar.width),
            ("height", bar.height),
        ]);
        pose.insert("label".to_owned(), AttrValue::Text(bar.repo.clone()));
        pose
    })
    .entry(|_, _| attributes([("y", BASELINE), ("height", 0.0)]));

    let mut data = repos(rng);
    let mut binder = Binder::new(config);
    play(
        plan,
        &mut binder,
        |cycle| {
            if cycle > 0 {
                for repo in data.iter_mut() {
                    if rng.chance(50.0) {
                        repo.commits += rng.below(300) as u32;
                    }
                }
            }
            let bars = chart_bars(&data);
            tracing::debug!(leader = ?bars.first().map(|b| &b.repo), "bars cycle");
            Ok(bars)
        },
        |bar: &Bar| bar.rank,
        &poses,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/demo/scenes.rs"]
mod tests;
