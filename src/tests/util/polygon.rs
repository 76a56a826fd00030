use super::vtest::VTest;

fn contour(points: &[(f32, f32)]) -> Vec<VTest> {
    points.iter().map(|&p| p.into()).collect()
}

pub fn square() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (0.0, 1.0).into(),
        (1.0, 1.0).into(),
        (1.0, 0.0).into(),
    ]
}

pub fn star() -> Vec<VTest> {
    vec![
        (1.0, 0.0).into(),
        (2.0, 2.0).into(),
        (0.0, 1.0).into(),
        (-2.0, 2.0).into(),
        (-1.0, 0.0).into(),
        (-2.0, -2.0).into(),
        (0.0, -1.0).into(),
        (2.0, -2.0).into(),
    ]
}

pub fn half_frame() -> Vec<VTest> {
    vec![
        (0., 0.).into(), (0.05, 0.05).into(), (0.95, 0.05).into(), (0.95, 0.95).into(), (1., 1.).into(), (1., 0.).into()
    ]
}

/// A rectangle with an extra vertex in the middle of the top and bottom edges
pub fn collinear() -> Vec<VTest> {
    contour(&[(0., 0.), (1., 0.), (2., 0.), (2., 2.), (1., 2.), (0., 2.)])
}

pub fn l_shape() -> Vec<VTest> {
    contour(&[(0., 0.), (3., 0.), (3., 1.), (1., 1.), (1., 3.), (0., 3.)])
}

pub fn u_shape() -> Vec<VTest> {
    contour(&[(0., 0.), (5., 0.), (5., 4.), (4., 4.), (4., 1.), (1., 1.), (1., 4.), (0., 4.)])
}

/// Teeth pointing up
pub fn comb() -> Vec<VTest> {
    contour(&[
        (0., 0.), (7., 0.), (7., 3.), (6., 3.), (6., 1.), (5., 1.), (5., 3.), (4., 3.),
        (4., 1.), (3., 1.), (3., 3.), (2., 3.), (2., 1.), (1., 1.), (1., 3.), (0., 3.),
    ])
}

/// Teeth pointing left
pub fn comb_left() -> Vec<VTest> {
    contour(&[
        (0., 0.), (3., 0.), (3., 7.), (0., 7.), (0., 6.), (2., 6.), (2., 5.), (0., 5.),
        (0., 4.), (2., 4.), (2., 3.), (0., 3.), (0., 2.), (2., 2.), (2., 1.), (0., 1.),
    ])
}

/// Teeth pointing right
pub fn comb_right() -> Vec<VTest> {
    contour(&[
        (0., 0.), (3., 0.), (3., 1.), (1., 1.), (1., 2.), (3., 2.),
        (3., 3.), (1., 3.), (1., 4.), (3., 4.), (3., 5.), (0., 5.),
    ])
}

pub fn stairs() -> Vec<VTest> {
    contour(&[(0., 0.), (4., 0.), (4., 1.), (3., 1.), (3., 2.), (2., 2.), (2., 3.), (1., 3.), (1., 4.), (0., 4.)])
}

pub fn spiral() -> Vec<VTest> {
    contour(&[
        (0., 0.), (6., 0.), (6., 6.), (1., 6.), (1., 2.), (4., 2.), (4., 4.),
        (3., 4.), (3., 3.), (2., 3.), (2., 5.), (5., 5.), (5., 1.), (0., 1.),
    ])
}

/// A square with a square hole
pub fn frame() -> Vec<Vec<VTest>> {
    vec![
        contour(&[(0., 0.), (4., 0.), (4., 4.), (0., 4.)]),
        contour(&[(1., 1.), (3., 1.), (3., 3.), (1., 3.)]),
    ]
}

/// A square with a diamond hole whose corners line up with the border's
pub fn diamond_hole() -> Vec<Vec<VTest>> {
    vec![
        contour(&[(0., 0.), (4., 0.), (4., 4.), (0., 4.)]),
        contour(&[(2., 1.), (3., 2.), (2., 3.), (1., 2.)]),
    ]
}

pub fn two_holes() -> Vec<Vec<VTest>> {
    vec![
        contour(&[(0., 0.), (10., 0.), (10., 5.), (0., 5.)]),
        contour(&[(1., 1.), (3., 1.), (3., 4.), (1., 4.)]),
        contour(&[(6., 1.), (8., 1.5), (7., 4.)]),
    ]
}

/// A 3x3 grid of unit square holes
pub fn grid_of_holes() -> Vec<Vec<VTest>> {
    let mut polygon_list = vec![contour(&[(0., 0.), (7., 0.), (7., 7.), (0., 7.)])];
    for i in 0..3 {
        for j in 0..3 {
            let (x, y) = ((1 + 2 * i) as f32, (1 + 2 * j) as f32);
            polygon_list.push(contour(&[(x, y), (x + 1., y), (x + 1., y + 1.), (x, y + 1.)]));
        }
    }
    polygon_list
}

/// Every fixture as a border followed by its holes
pub fn all() -> Vec<(&'static str, Vec<Vec<VTest>>)> {
    vec![
        ("square", vec![square()]),
        ("star", vec![star()]),
        ("half_frame", vec![half_frame()]),
        ("collinear", vec![collinear()]),
        ("l_shape", vec![l_shape()]),
        ("u_shape", vec![u_shape()]),
        ("comb", vec![comb()]),
        ("comb_left", vec![comb_left()]),
        ("comb_right", vec![comb_right()]),
        ("stairs", vec![stairs()]),
        ("spiral", vec![spiral()]),
        ("frame", frame()),
        ("diamond_hole", diamond_hole()),
        ("two_holes", two_holes()),
        ("grid_of_holes", grid_of_holes()),
    ]
}
