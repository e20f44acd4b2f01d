use serde::Serialize;

/// 分页请求：不分页，或（从 0 开始的页号, 每页条数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageRequest {
    #[default]
    Unpaged,
    Paged { page: usize, size: usize },
}

impl PageRequest {
    /// 创建分页请求；每页条数至少为 1
    pub fn of(page: usize, size: usize) -> Self {
        PageRequest::Paged {
            page,
            size: size.max(1),
        }
    }

    /// 起始偏移；页号来自用户输入，溢出时饱和为 `usize::MAX`
    pub fn offset(&self) -> usize {
        match self {
            PageRequest::Unpaged => 0,
            PageRequest::Paged { page, size } => page.saturating_mul(*size),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        match self {
            PageRequest::Unpaged => None,
            PageRequest::Paged { size, .. } => Some(*size),
        }
    }

    pub fn page_number(&self) -> usize {
        match self {
            PageRequest::Unpaged => 0,
            PageRequest::Paged { page, .. } => *page,
        }
    }

    /// 对已排好序的完整结果集切页（内存仓储使用）
    pub fn slice<T>(&self, items: Vec<T>) -> Page<T> {
        let total = items.len() as u64;
        let content = match self.limit() {
            None => items,
            Some(limit) => items.into_iter().skip(self.offset()).take(limit).collect(),
        };
        Page::new(content, *self, total)
    }
}

/// 分页结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    content: Vec<T>,
    number: usize,
    size: usize,
    total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let size = request.limit().unwrap_or(content.len());
        Self {
            content,
            number: request.page_number(),
            size,
            total_elements,
        }
    }

    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// 页号（从 0 开始）
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn total_pages(&self) -> usize {
        if self.total_elements == 0 {
            0
        } else if self.size == 0 {
            1
        } else {
            (self.total_elements as usize).div_ceil(self.size)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
