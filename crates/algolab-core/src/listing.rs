//! Source listings shown next to each result.
//!
//! Every algorithm has a reference listing in two languages. The listings
//! are static text for display only; nothing here is compiled or run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::error::AlgoError;

/// Language a listing is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    JavaScript,
    Java,
}

impl Language {
    /// Both listing languages, in display order.
    pub const ALL: [Language; 2] = [Language::JavaScript, Language::Java];

    /// Lowercase identifier used on the wire.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Java => "java",
        }
    }

    /// Display name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Java => "Java",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Language {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Self::JavaScript),
            "java" => Ok(Self::Java),
            _ => Err(AlgoError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Returns the listing of `algorithm` in `language`.
#[must_use]
pub fn listing(algorithm: Algorithm, language: Language) -> &'static str {
    match (algorithm, language) {
        (Algorithm::Prime, Language::JavaScript) => JS_PRIME,
        (Algorithm::Prime, Language::Java) => JAVA_PRIME,
        (Algorithm::Summation, Language::JavaScript) => JS_SUMMATION,
        (Algorithm::Summation, Language::Java) => JAVA_SUMMATION,
        (Algorithm::Fibonacci, Language::JavaScript) => JS_FIBONACCI,
        (Algorithm::Fibonacci, Language::Java) => JAVA_FIBONACCI,
        (Algorithm::Gcd, Language::JavaScript) => JS_GCD,
        (Algorithm::Gcd, Language::Java) => JAVA_GCD,
        (Algorithm::QuickSort, Language::JavaScript) => JS_QUICKSORT,
        (Algorithm::QuickSort, Language::Java) => JAVA_QUICKSORT,
        (Algorithm::Count, Language::JavaScript) => JS_COUNT,
        (Algorithm::Count, Language::Java) => JAVA_COUNT,
    }
}

const JS_PRIME: &str = r"function isPrime(num) {
  if (num <= 1) return false;
  if (num <= 3) return true;

  if (num % 2 === 0 || num % 3 === 0) return false;

  for (let i = 5; i * i <= num; i += 6) {
    if (num % i === 0 || num % (i + 2) === 0) return false;
  }

  return true;
}";

const JAVA_PRIME: &str = r"public static boolean isPrime(int num) {
  if (num <= 1) return false;
  if (num <= 3) return true;

  if (num % 2 == 0 || num % 3 == 0) return false;

  for (int i = 5; i * i <= num; i += 6) {
    if (num % i == 0 || num % (i + 2) == 0) return false;
  }

  return true;
}";

const JS_SUMMATION: &str = r"function summation(numbers) {
  return numbers.reduce((sum, number) => sum + number, 0);
}";

const JAVA_SUMMATION: &str = r"public static double summation(double[] numbers) {
  double sum = 0;
  for (double number : numbers) {
    sum += number;
  }
  return sum;
}";

const JS_FIBONACCI: &str = r"function fibonacci(n) {
  const sequence = [0, 1];

  for (let i = 2; i < n; i++) {
    sequence[i] = sequence[i-1] + sequence[i-2];
  }

  return sequence.slice(0, n);
}";

const JAVA_FIBONACCI: &str = r"public static int[] fibonacci(int n) {
  int[] sequence = new int[n];
  if (n > 0) sequence[0] = 0;
  if (n > 1) sequence[1] = 1;

  for (int i = 2; i < n; i++) {
    sequence[i] = sequence[i-1] + sequence[i-2];
  }

  return sequence;
}";

const JS_GCD: &str = r"function gcd(a, b) {
  // Euclidean algorithm
  while (b !== 0) {
    const temp = b;
    b = a % b;
    a = temp;
  }
  return a;
}";

const JAVA_GCD: &str = r"public static int gcd(int a, int b) {
  while (b != 0) {
    int temp = b;
    b = a % b;
    a = temp;
  }
  return a;
}";

const JS_QUICKSORT: &str = r"function quickSort(arr) {
  if (arr.length <= 1) {
    return arr;
  }

  const pivot = arr[Math.floor(arr.length / 2)];
  const left = arr.filter(x => x < pivot);
  const middle = arr.filter(x => x === pivot);
  const right = arr.filter(x => x > pivot);

  return [...quickSort(left), ...middle, ...quickSort(right)];
}";

const JAVA_QUICKSORT: &str = r"public static void quickSort(int[] arr, int low, int high) {
  if (low < high) {
    int pivotIndex = partition(arr, low, high);
    quickSort(arr, low, pivotIndex - 1);
    quickSort(arr, pivotIndex + 1, high);
  }
}

private static int partition(int[] arr, int low, int high) {
  int pivot = arr[high];
  int i = low - 1;

  for (int j = low; j < high; j++) {
    if (arr[j] <= pivot) {
      i++;
      int temp = arr[i];
      arr[i] = arr[j];
      arr[j] = temp;
    }
  }

  int temp = arr[i + 1];
  arr[i + 1] = arr[high];
  arr[high] = temp;

  return i + 1;
}";

const JS_COUNT: &str = r"function countInRange(data, n) {
  if (data.length === 0) return 0;

  const first = data[0];
  let count = 0;

  for (const num of data) {
    if (Number.isInteger(num) && num >= first && num <= n) {
      count++;
    }
  }

  return count;
}";

const JAVA_COUNT: &str = r"public static int countInRange(int[] data, int n) {
  if (data.length == 0) return 0;

  int first = data[0];
  int count = 0;

  for (int num : data) {
    if (num >= first && num <= n) {
      count++;
    }
  }

  return count;
}";
