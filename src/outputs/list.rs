/// A sink for triangles, each given as three values of type `T`.
///
/// `T` is a vertex index for indexed output, or a vertex for deindexed output.
pub trait List<T> {
    /// Append a triangle
    fn push_triangle(&mut self, triangle: [T; 3]);

    /// The number of triangles in the list
    fn triangle_count(&self) -> usize;

    /// Make room for `additional` more triangles
    fn reserve_triangles(&mut self, _additional: usize) { }
}

/// Flat list, three consecutive values per triangle
impl<T> List<T> for Vec<T> {
    fn push_triangle(&mut self, triangle: [T; 3]) {
        self.extend(triangle);
    }

    fn triangle_count(&self) -> usize {
        self.len() / 3
    }

    fn reserve_triangles(&mut self, additional: usize) {
        self.reserve(additional * 3);
    }
}

impl<T> List<T> for Vec<[T; 3]> {
    fn push_triangle(&mut self, triangle: [T; 3]) {
        self.push(triangle);
    }

    fn triangle_count(&self) -> usize {
        self.len()
    }

    fn reserve_triangles(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T> List<T> for Vec<(T, T, T)> {
    fn push_triangle(&mut self, [v0, v1, v2]: [T; 3]) {
        self.push((v0, v1, v2));
    }

    fn triangle_count(&self) -> usize {
        self.len()
    }

    fn reserve_triangles(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T, L: List<T>> List<T> for &mut L {
    fn push_triangle(&mut self, triangle: [T; 3]) {
        (**self).push_triangle(triangle)
    }

    fn triangle_count(&self) -> usize {
        (**self).triangle_count()
    }

    fn reserve_triangles(&mut self, additional: usize) {
        (**self).reserve_triangles(additional)
    }
}
